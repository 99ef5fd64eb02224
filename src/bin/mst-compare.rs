use mstcompare::options::Options;
use mstcompare::runner;

fn main() -> anyhow::Result<()> {
    if std::env::var("MST_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MST_LOG")
            .write_style("MST_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let mut flags = match std::env::var("MST_FLAGS") {
        Ok(s) => shellwords::split(&s)?,
        Err(_) => vec![],
    };
    flags.extend(std::env::args().skip(1));
    let options = match Options::parse_from_args(&flags) {
        Ok(options) => options,
        Err(e) => match e.downcast::<clap::Error>() {
            Ok(e) => e.exit(),
            Err(e) => return Err(e),
        },
    };
    log::debug!("options: {:?}", options);

    runner::run(&options)?;
    Ok(())
}
