mod archive;
mod args;
mod config;
mod context;
mod error;
mod naming;
mod packager;
mod result;
mod tpl;
mod utils;

use args::Args;
use config::Config;
use context::Context;
use packager::Packager;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    let Args {
        verbose,
        path,
        config: config_path,
        naming,
    } = Args::parse();

    let ctx = Context::new(path, verbose);

    cliclack::intro("workshop-pack")?;

    let config = {
        let result = match config_path {
            Some(file) => Config::load_from(&ctx.resolve(&file)),
            None => Config::load(&ctx),
        };
        let mut config = match result {
            Ok(c) => c,
            Err(e) => {
                cliclack::outro_cancel("Failed to load config")?;
                return Err(e);
            }
        };
        if let Some(naming) = naming {
            config.naming = naming;
        }
        config
    };

    cliclack::log::info(format!(
        "{} {} by {}",
        config.identity.name, config.identity.version, config.identity.author
    ))?;

    let packager = Packager::new(&ctx, &config);

    let spinner = cliclack::spinner();
    spinner.start("Packaging...");
    let archive_path = match packager.build() {
        Ok(path) => {
            spinner.stop(format!("Packaged {}", config.identity.staging_dir_name()));
            path
        }
        Err(e) => {
            spinner.error("Packaging failed");
            return Err(e);
        }
    };

    println!("archive has been created: '{}'", archive_path.display());

    cliclack::outro("Workshop archive created successfully!")?;
    Ok(())
}
