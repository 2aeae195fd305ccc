use argh::FromArgs;

mod scenarios;

#[derive(FromArgs, Debug)]
/// Run the documented vecmat scenarios and report which ones pass.
struct Args {
    /// only run scenarios whose group contains this string
    #[argh(option, short = 'g')]
    group: Option<String>,

    /// enable debug logs from the reduction engine
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let selected = scenarios::all()
        .into_iter()
        .filter(|s| args.group.as_deref().map_or(true, |g| s.group.contains(g)))
        .collect::<Vec<_>>();

    if selected.is_empty() {
        println!("No scenarios match the requested group");
        return Ok(());
    }

    let mut failed = 0;
    for scenario in selected.iter() {
        let status = match (scenario.run)() {
            Ok(true) => "PASS".to_string(),
            Ok(false) => {
                failed += 1;
                "FAIL".to_string()
            }
            Err(e) => {
                failed += 1;
                format!("ERROR ({e})")
            }
        };
        println!("[{status}] {}: {}", scenario.group, scenario.name);
    }

    println!("{} passed, {} failed", selected.len() - failed, failed);
    if failed > 0 {
        log::error!("{failed} scenario(s) failed");
        std::process::exit(1);
    }

    Ok(())
}
