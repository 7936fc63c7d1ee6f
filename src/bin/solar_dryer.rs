use std::{
    error::Error,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use twine_solar_dryer::models::thermal::solar_dryer::{
    Batch, Collector, CurveConfig, DryingCurve, Inputs, Results, compute_balance, generate_curve,
};
use uom::si::{
    area::square_meter,
    f64::{Area, HeatFluxDensity, Mass, Ratio, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    mass::kilogram,
    mass_rate::kilogram_per_second,
    power::watt,
    ratio::{percent, ratio},
    thermodynamic_temperature::degree_celsius,
    time::hour,
};

/// Estimate drying time and drying curve for a basic solar dehydrator
#[derive(Parser, Debug)]
#[command(name = "solar-dryer")]
#[command(about = "Solar dehydrator energy and mass balance", long_about = None)]
struct Args {
    /// Ambient temperature in °C (reported only, not used by the balance)
    #[arg(long, default_value_t = 25.0, allow_negative_numbers = true)]
    ambient_temperature: f64,

    /// Solar irradiance in W/m²
    #[arg(short = 'g', long, default_value_t = 800.0, allow_negative_numbers = true)]
    irradiance: f64,

    /// Collector area in m²
    #[arg(short, long, default_value_t = 2.0, allow_negative_numbers = true)]
    area: f64,

    /// Collector efficiency (0-1]
    #[arg(short, long, default_value_t = 0.5, allow_negative_numbers = true)]
    efficiency: f64,

    /// Initial batch mass in kg
    #[arg(short = 'm', long, default_value_t = 1.0, allow_negative_numbers = true)]
    initial_mass: f64,

    /// Initial moisture content, wet basis (0-1)
    #[arg(short, long, default_value_t = 0.87, allow_negative_numbers = true)]
    initial_moisture: f64,

    /// Final moisture content, wet basis (0-1)
    #[arg(short, long, default_value_t = 0.25, allow_negative_numbers = true)]
    final_moisture: f64,

    /// Number of drying curve intervals
    #[arg(short, long, default_value_t = 100, allow_negative_numbers = true)]
    steps: i64,

    /// Print the drying curve as CSV after the report
    #[arg(short, long)]
    curve: bool,
}

impl Args {
    fn inputs(&self) -> Inputs {
        Inputs {
            ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(
                self.ambient_temperature,
            ),
            irradiance: HeatFluxDensity::new::<watt_per_square_meter>(self.irradiance),
            collector: Collector {
                area: Area::new::<square_meter>(self.area),
                efficiency: Ratio::new::<ratio>(self.efficiency),
            },
            batch: Batch {
                initial_mass: Mass::new::<kilogram>(self.initial_mass),
                initial_moisture: Ratio::new::<ratio>(self.initial_moisture),
                final_moisture: Ratio::new::<ratio>(self.final_moisture),
            },
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "dryer run failed");
            eprintln!("error: {}", error_chain(err.as_ref()));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = CurveConfig::try_from(args.steps)?;

    let results = compute_balance(&args.inputs())?;
    debug!(
        useful_energy_w = results.useful_energy.get::<watt>(),
        water_to_remove_kg = results.water_to_remove.get::<kilogram>(),
        max_rate_kg_s = results.max_water_removal_rate.get::<kilogram_per_second>(),
        drying_time_h = results.minimum_drying_time.get::<hour>(),
        "computed balance"
    );

    let curve = generate_curve(&results, config)?;
    debug!(samples = curve.len(), "generated drying curve");

    let mut out = io::stdout().lock();
    print_report(&mut out, &results)?;
    if args.curve {
        print_curve(&mut out, &curve)?;
    }
    Ok(())
}

fn print_report(out: &mut impl Write, results: &Results) -> io::Result<()> {
    let hours = results.minimum_drying_time.get::<hour>();
    let (whole_hours, minutes) = split_hours(hours);

    writeln!(out, "--- Solar dryer results ---")?;
    writeln!(
        out,
        "Ambient temperature: {:.1} °C",
        results.ambient_temperature.get::<degree_celsius>()
    )?;
    writeln!(
        out,
        "Moisture content: {:.1}% → {:.1}% (wet basis), {:.3} → {:.3} kg/kg (dry basis)",
        results.initial_moisture.get::<percent>(),
        results.final_moisture.get::<percent>(),
        results.initial_moisture.dry_basis().get::<ratio>(),
        results.final_moisture.dry_basis().get::<ratio>(),
    )?;
    writeln!(
        out,
        "Theoretical final mass: {:.3} kg",
        results.final_total_mass.get::<kilogram>()
    )?;
    writeln!(
        out,
        "Useful energy: {:.2} W",
        results.useful_energy.get::<watt>()
    )?;
    writeln!(
        out,
        "Dry solid mass: {:.3} kg",
        results.dry_solid_mass.get::<kilogram>()
    )?;
    writeln!(
        out,
        "Water to remove: {:.3} kg",
        results.water_to_remove.get::<kilogram>()
    )?;
    writeln!(
        out,
        "Minimum drying time: {hours:.2} hours ({whole_hours} h {minutes} min)"
    )
}

fn print_curve(out: &mut impl Write, curve: &DryingCurve) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Time (hours),Moisture content (wet basis)")?;
    for (hours, moisture) in curve.points() {
        writeln!(out, "{hours:.6},{moisture:.6}")?;
    }
    Ok(())
}

/// Splits fractional hours into whole hours and whole minutes.
///
/// Hours are rounded to two decimals first, so the split agrees with the
/// value printed beside it.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn split_hours(hours: f64) -> (u64, u64) {
    let rounded = (hours * 100.0).round() / 100.0;
    let whole = rounded.trunc();
    (whole as u64, ((rounded - whole) * 60.0) as u64)
}

fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
