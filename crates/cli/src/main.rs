use clap::{Parser, Subcommand};
use symcheck_core::{
    constants::NO_MATCHES_MESSAGE, explain_matches, format_percentage, ConfidenceTier,
    SummaryExplainer, SymptomCheckService, SymptomSelection,
};

#[derive(Parser)]
#[command(name = "symcheck")]
#[command(about = "SymCheck symptom checker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank conditions against the given symptoms
    Match {
        /// Symptoms, one per argument (quote multi-word symptoms)
        #[arg(required = true)]
        symptoms: Vec<String>,
        /// Print a short explanation for each match
        #[arg(long)]
        explain: bool,
    },
    /// List every known symptom
    Symptoms,
    /// Suggest symptoms for partially typed text
    Suggest {
        /// Partially typed symptom
        text: String,
        /// Symptoms already selected (comma-separated)
        #[arg(long, value_delimiter = ',')]
        selected: Vec<String>,
    },
    /// List every condition with its most common symptoms
    Conditions,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let service = SymptomCheckService::default();

    match cli.command {
        Some(Commands::Match { symptoms, explain }) => {
            let selection = SymptomSelection::from_raw(&symptoms)?;
            let query: Vec<String> = selection.iter().map(str::to_owned).collect();
            let matches = service.match_symptoms(selection.require_non_empty()?);

            if matches.is_empty() {
                println!("No matches found. {}", NO_MATCHES_MESSAGE);
                return Ok(());
            }

            let explanations = if explain {
                explain_matches(&SummaryExplainer, &matches, &query)
            } else {
                Vec::new()
            };

            for (i, m) in matches.iter().enumerate() {
                println!(
                    "{}. {} - {} match ({})",
                    i + 1,
                    m.condition_name(),
                    format_percentage(m.confidence),
                    ConfidenceTier::from_confidence(m.confidence)
                );
                println!("   Matched: {}", m.matched_symptoms.join(", "));
                if let Some(e) = explanations.get(i) {
                    println!("   {}", e.text);
                }
            }
        }
        Some(Commands::Symptoms) => {
            for tag in service.symptom_tags() {
                println!("{}", tag);
            }
        }
        Some(Commands::Suggest { text, selected }) => {
            let suggestions = service.suggestions(&text, &selected);
            if suggestions.is_empty() {
                println!("No suggestions.");
            } else {
                for s in suggestions {
                    println!("{}", s);
                }
            }
        }
        Some(Commands::Conditions) => {
            for condition in service.catalog().all() {
                println!(
                    "{} (common: {})",
                    condition.name,
                    condition.common_symptoms.join(", ")
                );
            }
        }
        None => {
            println!("Use 'symcheck --help' for commands");
        }
    }

    Ok(())
}
