use code_breaker::cache::opening_cache_path;
use code_breaker::cli::{CliInterface, parse_cli};
use code_breaker::game_loop;
use code_breaker::logging::init_logger;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logger();
    let cli = parse_cli();

    let config = match cli.session_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("main() - config: {config:?}, seed: {:?}", cli.seed);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let cache_path = if cli.no_cache {
        None
    } else {
        opening_cache_path(&config)
    };

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock()).with_show_secret(cli.show_secret);
    let summary = game_loop(&config, &mut rng, &mut interface, cache_path.as_deref());

    if summary.won + summary.lost > 0 {
        println!(
            "Games won: {}, lost: {}, abandoned: {}",
            summary.won, summary.lost, summary.abandoned
        );
    }
    ExitCode::SUCCESS
}
