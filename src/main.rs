use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hairfit::{
    AppError, CheekboneType, Consultation, ConsultationRecord, DEFAULT_REPORT_FILE,
    DEFAULT_STORE_FILE, FaceShape, ForeheadType, HairStyle, JawType, NeckLength, NeckThickness,
    Selection, ShoulderShape,
};

#[derive(Parser)]
#[command(name = "hairfit")]
#[command(version)]
#[command(
    about = "Hair consultation analysis: stability grading, image prompts, and records",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a selection set and print the composed image prompt
    #[clap(visible_alias = "a")]
    Analyze {
        #[command(flatten)]
        selections: SelectionArgs,
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Capture a consultation interactively
    #[clap(visible_alias = "c")]
    Consult {
        /// Append the consultation to the record store when done
        #[arg(long)]
        save: bool,
        /// Record store path
        #[arg(long, default_value = DEFAULT_STORE_FILE)]
        store: PathBuf,
    },
    /// Evaluate a selection set and append it to the record store
    #[clap(visible_alias = "r")]
    Record {
        #[command(flatten)]
        selections: SelectionArgs,
        /// Record store path
        #[arg(long, default_value = DEFAULT_STORE_FILE)]
        store: PathBuf,
    },
    /// List previously recorded consultations
    History {
        /// Record store path
        #[arg(long, default_value = DEFAULT_STORE_FILE)]
        store: PathBuf,
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the consultation report document
    Report {
        #[command(flatten)]
        selections: SelectionArgs,
        /// Output file path
        #[arg(long, default_value = DEFAULT_REPORT_FILE)]
        out: PathBuf,
    },
    /// Send the composed prompt to the image-generation service
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        selections: SelectionArgs,
        /// Number of images to request (default from hairfit.toml)
        #[arg(long)]
        count: Option<u32>,
        /// Image resolution, e.g. 512x512 (default from hairfit.toml)
        #[arg(long)]
        size: Option<String>,
        /// Print the would-be request instead of calling the service
        #[arg(long)]
        mock: bool,
    },
}

/// Raw selection tokens, validated strictly when building the consultation.
#[derive(Args)]
struct SelectionArgs {
    /// Face shape: round, oval, square, heart, long
    #[arg(long)]
    face: String,
    /// Forehead: wide, narrow, medium
    #[arg(long)]
    forehead: String,
    /// Cheekbone: wide, low, average
    #[arg(long)]
    cheekbone: String,
    /// Jawline: defined, round, recessed
    #[arg(long)]
    jaw: String,
    /// Neck length: short, average, long
    #[arg(long)]
    neck_length: String,
    /// Neck thickness: thin, average, thick
    #[arg(long)]
    neck_thickness: String,
    /// Shoulder shape: narrow, average, wide
    #[arg(long)]
    shoulder: String,
    /// Hairstyle: short_cut, bob, hush_cut, medium_layered
    #[arg(long)]
    style: String,
    /// Customer name
    #[arg(long, default_value = "")]
    customer: String,
    /// Customer contact number
    #[arg(long, default_value = "")]
    phone: String,
    /// Designer name
    #[arg(long, default_value = "")]
    designer: String,
}

impl SelectionArgs {
    fn into_consultation(self) -> Result<Consultation, AppError> {
        Ok(Consultation {
            customer_name: self.customer,
            customer_phone: self.phone,
            designer: self.designer,
            date: chrono::Local::now().date_naive(),
            face: FaceShape::parse(&self.face)?,
            forehead: ForeheadType::parse(&self.forehead)?,
            cheekbone: CheekboneType::parse(&self.cheekbone)?,
            jaw: JawType::parse(&self.jaw)?,
            neck_length: NeckLength::parse(&self.neck_length)?,
            neck_thickness: NeckThickness::parse(&self.neck_thickness)?,
            shoulder: ShoulderShape::parse(&self.shoulder)?,
            style: HairStyle::parse(&self.style)?,
        })
    }
}

fn print_evaluation(record: &ConsultationRecord) {
    println!("Stability grade: {}", record.grade.display());
    println!();
    println!("{}", record.prompt);
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Analyze { selections, json } => {
            let record = hairfit::analyze(selections.into_consultation()?);
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_evaluation(&record);
            }
        }
        Commands::Consult { save, store } => match hairfit::consult()? {
            Some(consultation) => {
                let record = if save {
                    let record = hairfit::record(&store, consultation)?;
                    println!("✅ Recorded to {}", store.display());
                    record
                } else {
                    hairfit::analyze(consultation)
                };
                print_evaluation(&record);
            }
            None => println!("Cancelled."),
        },
        Commands::Record { selections, store } => {
            let record = hairfit::record(&store, selections.into_consultation()?)?;
            println!("✅ Recorded to {}", store.display());
            print_evaluation(&record);
        }
        Commands::History { store, json } => {
            let records = hairfit::history(&store)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for r in &records {
                    println!(
                        "{}\t{}\t{}\t{}",
                        r.consultation.date.format("%Y-%m-%d"),
                        r.consultation.customer_name,
                        r.consultation.style,
                        r.grade
                    );
                }
            }
        }
        Commands::Report { selections, out } => {
            hairfit::report(selections.into_consultation()?, &out)?;
            println!("✅ Report written to {}", out.display());
        }
        Commands::Generate { selections, count, size, mock } => {
            let (record, image) =
                hairfit::generate(selections.into_consultation()?, count, size, mock)?;
            println!("Stability grade: {}", record.grade.display());
            println!("Image: {}", image.url);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
