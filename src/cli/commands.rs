use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::fetchers::StationFetcher;
use crate::processors::SeriesExtractor;
use crate::readers::RecordReader;
use crate::utils::filename::raw_data_path;
use crate::utils::progress::ProgressReporter;
use crate::writers::SeriesWriter;

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fetch {
            year,
            station,
            data_dir,
        } => {
            fetch(&station, year, &data_dir).await?;
        }

        Commands::Process {
            year,
            station,
            data_dir,
        } => {
            process(&station, year, &data_dir)?;
        }

        Commands::Run {
            year,
            station,
            data_dir,
            parallel_render,
        } => {
            let raw_path = raw_data_path(&data_dir, &station, year);
            if raw_path.exists() {
                println!("Raw file already present: {}", raw_path.display());
            } else {
                fetch(&station, year, &data_dir).await?;
            }

            process(&station, year, &data_dir)?;

            if parallel_render {
                println!("Series ready; invoke the chart renderer with its parallel helper.");
            } else {
                println!("Series ready; invoke the chart renderer.");
            }
        }
    }

    Ok(())
}

async fn fetch(station: &str, year: i32, data_dir: &Path) -> Result<()> {
    println!("Fetching raw data for station {}, year {}...", station, year);

    let progress = ProgressReporter::new_spinner("Downloading...", false);

    let fetcher = StationFetcher::new();
    let dest = raw_data_path(data_dir, station, year);
    let path = fetcher.fetch_year(station, year, &dest).await?;

    progress.finish_with_message(&format!("Downloaded {}", path.display()));
    Ok(())
}

fn process(station: &str, year: i32, data_dir: &Path) -> Result<()> {
    println!("Processing station {}, year {}...", station, year);

    let progress = ProgressReporter::new_spinner("Extracting series...", false);

    let raw_path = raw_data_path(data_dir, station, year);
    let records = RecordReader::new().read_records(&raw_path)?;
    progress.set_message(&format!("Parsed {} raw records", records.len()));

    let extractor = SeriesExtractor::new(station, year);
    let series = extractor.extract(&records)?;

    let writer = SeriesWriter::new(data_dir);
    let written = writer.write_year(&series)?;

    progress.finish_with_message("Extraction complete");

    println!("\n{}", series.summary());
    for path in written {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
