use std::sync::Arc;

use log::info;

use common::{SampleBuffer, Translation, TranslationCollection};
use phyphox_export::{
    Cell, ExportColumn, ExportError, ExportFileFormat, ExportSet, Experiment, ExperimentExport,
    EXPORT_TYPES,
};

const N_SAMPLES: usize = 20;
const SAMPLE_PERIOD_SECS: f64 = 0.05;
const BUFFER_SIZE: usize = 1000;

// Usage: cargo run --example export_demo -- "CSV (Semicolon, decimal comma)" [locale]
fn main() -> Result<(), ExportError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let format = match args.next() {
        Some(label) => ExportFileFormat::from_label(&label)?,
        None => {
            eprintln!("Available formats:");
            for (label, _) in EXPORT_TYPES {
                eprintln!("  {}", label);
            }
            return Ok(());
        }
    };
    let locale = args.next().unwrap_or_else(|| "de".to_string());

    let mut translation = TranslationCollection::new(vec![Translation::new("de")
        .with_entry("Pendulum", "Pendel")
        .with_entry("Raw Data", "Rohdaten")
        .with_entry("Time (s)", "Zeit (s)")
        .with_entry("Angle (rad)", "Winkel (rad)")]);
    translation.select_language(&[locale.as_str()]);
    let translation = Arc::new(translation);

    let mut time = SampleBuffer::new("t", BUFFER_SIZE);
    let mut angle = SampleBuffer::new("phi", BUFFER_SIZE);
    for i in 0..N_SAMPLES {
        let t = i as f64 * SAMPLE_PERIOD_SECS;
        time.push(t);
        angle.push(0.3 * (2.0 * std::f64::consts::PI * t).cos());
    }

    let mut experiment = Experiment::new(
        "Pendulum",
        "Angle of a pendulum over time",
        "Mechanics",
        Some(translation.clone()),
    );
    experiment.add_export_set(ExportSet::new(
        "Raw Data",
        vec![
            ExportColumn::new("Time (s)", Arc::new(time)),
            ExportColumn::new("Angle (rad)", Arc::new(angle)),
        ],
        Some(translation),
    ));

    match experiment.export(&format)? {
        ExperimentExport::Files(files) => {
            for file in files {
                info!("{}: {} bytes", file.file_name, file.data.len());
                println!("== {}", file.file_name);
                println!("{}", String::from_utf8(file.data)?);
            }
        }
        ExperimentExport::Workbook(workbook) => {
            for sheet in workbook.sheets() {
                println!("== {} ({} rows)", sheet.name(), sheet.rows());
                for (row, column, cell) in sheet.iter() {
                    match cell {
                        Cell::Text(text) => println!("[{}, {}] {}", row, column, text),
                        Cell::Number(value) => println!("[{}, {}] {}", row, column, value),
                    }
                }
            }
        }
    }
    Ok(())
}
