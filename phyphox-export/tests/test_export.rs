use std::sync::Arc;

use once_cell::sync::Lazy;

use common::{DataBuffer, SampleBuffer, Translation, TranslationCollection};
use phyphox_export::{
    ExportColumn, ExportFileFormat, ExportSet, Experiment, ExperimentExport, Serialized,
    EXPORT_TYPES,
};
use test_utils::csv_loader::{load_export, raw_lines};
use test_utils::fixtures::{accelerometer_buffers, sparse_buffer, FixtureColumn};
use test_utils::sheet_mock::{MockValue, SheetMock, WorkbookMock};

const N_SAMPLES: usize = 50;
const SAMPLE_PERIOD: f64 = 0.01;

static GERMAN: Lazy<Arc<TranslationCollection>> = Lazy::new(|| {
    let mut collection = TranslationCollection::new(vec![Translation::new("de")
        .with_entry("Voltage", "Spannung")
        .with_entry("Time (s)", "Zeit (s)")
        .with_entry("Raw Data", "Rohdaten")]);
    collection.select_language(&["de-DE"]);
    Arc::new(collection)
});

fn accelerometer_set() -> ExportSet {
    let columns = accelerometer_buffers(N_SAMPLES, SAMPLE_PERIOD)
        .into_iter()
        .map(|(column, buffer)| ExportColumn::new(column.name(), buffer))
        .collect();
    ExportSet::new("Raw Data", columns, Some(Arc::clone(&*GERMAN)))
}

#[test]
fn test_header_always_present() {
    let set = accelerometer_set();
    for (label, format) in EXPORT_TYPES.iter().filter(|(_, f)| f.is_csv()) {
        let ExportFileFormat::Csv {
            separator,
            decimal_point,
        } = *format
        else {
            unreachable!();
        };
        let Some(Serialized::Csv(data)) = set.serialize(format).unwrap() else {
            panic!("no csv output for {}", label);
        };
        let table = load_export(&data, separator, decimal_point).unwrap();
        assert_eq!(
            table.headers,
            vec![
                "Zeit (s)",
                "Acceleration x (m/s^2)",
                "Acceleration y (m/s^2)",
                "Acceleration z (m/s^2)"
            ]
        );
        let lines = raw_lines(&data).unwrap();
        assert!(lines[0].starts_with("\"Zeit (s)\""));
    }
}

#[test]
fn test_row_alignment() {
    let set = accelerometer_set();
    let data = set.serialize_csv(';', ',').unwrap().unwrap();
    let table = load_export(&data, ';', ',').unwrap();

    assert_eq!(table.rows.len(), N_SAMPLES);
    for (j, column) in set.columns().iter().enumerate() {
        for (i, value) in table.column(j).iter().enumerate() {
            let expected = column.buffer.object_at_index(i).unwrap();
            let value = value.unwrap();
            assert!(
                (value - expected).abs() <= expected.abs() * 1e-9,
                "row {} column {}: {} != {}",
                i,
                j,
                value,
                expected
            );
        }
    }
    assert_eq!(
        FixtureColumn::try_from(1usize).unwrap().name(),
        set.columns()[1].name
    );
}

#[test]
fn test_stop_at_gap() {
    let set: ExportSet = ExportSet::new(
        "Raw Data",
        vec![
            ExportColumn::new("a", sparse_buffer("a", &[Some(1.0), None, Some(3.0)])),
            ExportColumn::new("b", sparse_buffer("b", &[Some(2.0), None, Some(4.0)])),
        ],
        None,
    );

    let data = set.serialize_csv(',', '.').unwrap().unwrap();
    let table = load_export(&data, ',', '.').unwrap();
    assert_eq!(table.rows, vec![vec![Some(1.0), Some(2.0)]]);

    let mut sheet = SheetMock::new("Raw Data");
    set.write_sheet(&mut sheet);
    assert!(sheet.row(2).is_empty());
    assert!(sheet.row(3).is_empty());
    assert_eq!(sheet.row(1).len(), 2);
}

#[test]
fn test_gap_in_one_column_only() {
    let set: ExportSet = ExportSet::new(
        "Raw Data",
        vec![
            ExportColumn::new("a", sparse_buffer("a", &[Some(1.0), None, Some(3.0)])),
            ExportColumn::new("b", sparse_buffer("b", &[Some(2.0), Some(5.0)])),
        ],
        None,
    );

    let data = set.serialize_csv(',', '.').unwrap().unwrap();
    assert_eq!(
        raw_lines(&data).unwrap(),
        vec![
            "\"a\",\"b\"",
            "1.000000000E+00,2.000000000E+00",
            "\"\",5.000000000E+00",
            "3.000000000E+00,\"\"",
        ]
    );
}

#[test]
fn test_localization() {
    let buffer = Arc::new(SampleBuffer::from_values("voltage", &[1.0]));
    let set = ExportSet::new(
        "Voltage",
        vec![ExportColumn::new("Voltage", buffer)],
        Some(Arc::clone(&*GERMAN)),
    );
    let Some(Serialized::Csv(data)) = set.serialize(&ExportFileFormat::csv(',', '.')).unwrap()
    else {
        panic!("expected csv output");
    };
    assert_eq!(raw_lines(&data).unwrap()[0], "\"Spannung\"");
}

#[test]
fn test_spreadsheet_leaves_missing_cells_unset() {
    let set: ExportSet = ExportSet::new(
        "Raw Data",
        vec![
            ExportColumn::new("a", sparse_buffer("a", &[Some(0.0), Some(1.0)])),
            ExportColumn::new("b", sparse_buffer("b", &[Some(0.0)])),
        ],
        None,
    );

    let mut workbook = WorkbookMock::new();
    set.serialize_to_workbook(&mut workbook);
    let sheet = &workbook.sheets[0];

    assert_eq!(sheet.name, "Raw Data");
    assert_eq!(sheet.row(0).len(), 2);
    assert_eq!(sheet.row(0)[1].value, MockValue::Text("b".to_string()));
    assert_eq!(sheet.row(1)[1].value, MockValue::Float(0.0));
    assert!(sheet.was_written(2, 0));
    assert!(!sheet.was_written(2, 1));
    assert_eq!(sheet.writes.len(), 5);
}

#[test]
fn test_equality() {
    let buffers = accelerometer_buffers(3, SAMPLE_PERIOD);
    let columns: Vec<ExportColumn> = buffers
        .iter()
        .map(|(column, buffer)| ExportColumn::new(column.name(), buffer.clone()))
        .collect();

    let a = ExportSet::new("Raw Data", columns.clone(), Some(Arc::clone(&*GERMAN)));
    let b = ExportSet::new("Raw Data", columns.clone(), Some(Arc::clone(&*GERMAN)));
    assert_eq!(a, b);

    let mut reordered = columns.clone();
    reordered.swap(0, 1);
    assert_ne!(a, ExportSet::new("Raw Data", reordered, Some(Arc::clone(&*GERMAN))));

    let mut renamed = columns.clone();
    renamed[2].name = "Acceleration y".to_string();
    assert_ne!(a, ExportSet::new("Raw Data", renamed, Some(Arc::clone(&*GERMAN))));

    assert_ne!(a, ExportSet::new("Raw Data", columns, None));
}

#[test]
fn test_localized_columns_idempotent() {
    let set = accelerometer_set();
    let first: Vec<String> = set
        .localized_columns()
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();
    let second: Vec<String> = set
        .localized_columns()
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();
    assert_eq!(first, second);
    assert_eq!(first[0], "Zeit (s)");
    assert_eq!(set.columns()[0].name, "Time (s)");
}

#[test]
fn test_experiment_export_every_format() {
    let mut experiment = Experiment::new(
        "Acceleration",
        "Acceleration without g",
        "Raw Sensors",
        Some(Arc::clone(&*GERMAN)),
    );
    experiment.add_export_set(accelerometer_set());

    for (label, format) in EXPORT_TYPES {
        match experiment.export(&format).unwrap() {
            ExperimentExport::Files(files) => {
                assert!(format.is_csv(), "{} exported files", label);
                assert_eq!(files.len(), 1);
                assert_eq!(files[0].file_name, "Rohdaten.csv");
            }
            ExperimentExport::Workbook(workbook) => {
                assert_eq!(format, ExportFileFormat::Spreadsheet);
                let sheet = workbook.sheet("Rohdaten").unwrap();
                assert_eq!(sheet.rows() as usize, N_SAMPLES + 1);
                assert_eq!(sheet.columns() as usize, FixtureColumn::ALL.len());
            }
        }
    }
}
