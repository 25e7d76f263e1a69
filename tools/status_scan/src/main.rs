use status_core::StatusReport;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<std::ffi::OsString> = std::env::args_os().collect();
    if args.len() != 2 {
        println!("usage: status_scan <json_file>");
        std::process::exit(1);
    }
    let path = std::path::Path::new(&args[1]);
    log::debug!("scanning {}", path.display());

    let report = match StatusReport::scan_file(path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("status_scan: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    if let Err(e) = report.write_to(&mut out) {
        eprintln!("status_scan: cannot write output: {}", e);
        std::process::exit(1);
    }
}
