use clap::Parser;
use modelbench_core::{InteractiveModel, InteractiveWindow};
use modelbench_gui::{run_gui, GuiConfig};

mod models;

use models::{DampedOscillator, Quadratic};

#[derive(Parser)]
#[command(name = "modelbench", version, about = "Interactive parameter bench for plotted models")]
struct Cli {
    /// Window title
    #[arg(long, default_value = "modelbench")]
    title: String,
    #[arg(long, default_value_t = 960.0)]
    width: f32,
    #[arg(long, default_value_t = 600.0)]
    height: f32,
    /// Show only the named demo model (quadratic, oscillator)
    #[arg(long)]
    only: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let mut models: Vec<Box<dyn InteractiveModel>> = vec![
        Box::new(Quadratic::default()),
        Box::new(DampedOscillator::default()),
    ];
    if let Some(only) = &cli.only {
        let wanted = only.to_ascii_lowercase();
        models.retain(|model| model.name().to_ascii_lowercase().contains(&wanted));
        if models.is_empty() {
            return Err(format!("no demo model matches `{only}`").into());
        }
    }

    let mut window = InteractiveWindow::new(models)?;
    window.interact()?;
    log::info!("bench ready with {} model(s)", window.tabs().len());

    run_gui(
        window,
        GuiConfig {
            title: cli.title,
            width: cli.width,
            height: cli.height,
        },
    )?;
    Ok(())
}
