use clap::{Parser, Subcommand};
use serde_json::Value;

use formstate_rs::{prune, Action, FormStore, ModelLoader, ValuePath};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a file of actions and print the resulting state
    Reduce {
        /// Path to the actions file (YAML or JSON)
        #[arg(short, long)]
        actions: String,

        /// Model to install before replaying
        #[arg(short, long)]
        model: Option<String>,

        /// Initial form value
        #[arg(short, long)]
        value: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Sweep a value against a model and print what survives
    Prune {
        /// Path to the value file (YAML or JSON)
        #[arg(short, long)]
        value: String,

        /// Model to sweep against
        #[arg(short, long)]
        model: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Reduce {
            actions,
            model,
            value,
            pretty,
        } => {
            let loader = ModelLoader::new();

            let mut store = FormStore::new();
            store.dispatch(Action::Init);

            if let Some(path) = model {
                let model = loader.load_model(path)?;
                store.dispatch(Action::change_model(model));
            }
            if let Some(path) = value {
                let initial = loader.load_value(path)?;
                store.dispatch(Action::change_value(ValuePath::root(), initial));
            }

            store.dispatch_all(loader.load_actions(actions)?);

            println!("{}", render(&serde_json::to_value(store.state())?, pretty)?);
        }
        Commands::Prune {
            value,
            model,
            pretty,
        } => {
            let loader = ModelLoader::new();
            let value = loader.load_value(value)?;
            let model = model.map(|path| loader.load_model(path)).transpose()?;

            let swept = prune(value, model.as_ref());
            println!("{}", render(&swept, pretty)?);
        }
    }

    Ok(())
}

fn render(value: &Value, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}
