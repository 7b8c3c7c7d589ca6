use clap::Parser;
use gaussian_model::GaussianModel;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

/// Fits a normal distribution to a dataset, evaluates it at a point and draws new values from it.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "1.2,0.9,1.5,1.1,0.8",
        help = "Comma separated values to fit the distribution to"
    )]
    data: Vec<f64>,

    #[arg(
        long,
        default_value_t = 1.0,
        allow_negative_numbers = true,
        help = "The point at which the density and the cumulative probability are evaluated"
    )]
    at: f64,

    #[arg(short = 'n', long, default_value_t = 5, help = "Number of values to draw")]
    samples: usize,

    #[arg(long, help = "Seed for the generator, for reproducible samples")]
    seed: Option<u64>,
}

fn main() -> Result<(), gaussian_model::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let mut model = GaussianModel::default();
    model.fit(&cli.data)?;

    println!("Fitted mean = {}", model.mean());
    println!("Fitted stddev = {}", model.stddev());

    println!("PDF({}) = {}", cli.at, model.density(cli.at));
    println!("CDF({}) = {}", cli.at, model.cumulative_probability(cli.at));

    let samples = match cli.seed {
        Some(seed) => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            model.sample_with(cli.samples, &mut rng)?
        }
        None => model.sample(cli.samples)?,
    };
    let samples: Vec<String> = samples.iter().map(f64::to_string).collect();
    println!("Random samples: {}", samples.join(" "));

    Ok(())
}
