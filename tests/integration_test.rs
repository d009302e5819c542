use std::sync::Arc;
use std::time::Duration;

use tokio::io::BufReader;
use warung_order::config::Config;
use warung_order::lifecycle::{run_session, OrderSystem, SessionOutcome};
use warung_order::model::{MenuCatalog, MenuItem};
use warung_order::order_actor;
use warung_order::receipt::decode_summary;

async fn session(script: &str) -> (SessionOutcome, String, usize) {
    let catalog = MenuCatalog::new(vec![
        MenuItem::new("Nasi Goreng", 20.0),
        MenuItem::new("Mie Kuah", 25.0),
    ]);
    let system = OrderSystem::with_catalog(Config::default(), catalog.clone());
    assert_eq!(system.catalog(), &catalog);
    let mut input = BufReader::new(script.as_bytes());
    let mut output = Vec::new();
    let outcome = system
        .run_session(&mut input, &mut output)
        .await
        .expect("Session failed");
    let final_list = system.shutdown().await.expect("Failed to shutdown system");
    (outcome, String::from_utf8(output).unwrap(), final_list.len())
}

fn encoded_payload(output: &str) -> &str {
    output
        .lines()
        .find_map(|l| l.strip_prefix("Pesanan Terencoded: "))
        .expect("No encoded line")
}

/// Select item 1, quantity 3, decline: one line, total 60.
#[tokio::test]
async fn test_single_item_session() {
    let (outcome, output, size) = session("1\n3\nn\n").await;

    assert_eq!(size, 1);
    assert!(output.contains("Ditambahkan 3 Nasi Goreng ke pesanan.\n"));
    assert!(output.contains("Item: Nasi Goreng, Jumlah: 3, Total: Rp.60.00\n"));
    assert!(output.contains("Total Harga: Rp60.00\n"));
    assert!(output.ends_with("Program selesai.\n"));

    let decoded = decode_summary(encoded_payload(&output)).unwrap();
    assert_eq!(decoded, "Pesanan: [{Nasi Goreng 20 3}]\nTotal Harga: Rp60.00");

    match outcome {
        SessionOutcome::Completed { report, receipt } => {
            assert_eq!(report.appended, 1);
            assert_eq!(receipt.total, 60.0);
        }
        SessionOutcome::TimedOut => panic!("Unexpected timeout"),
    }
}

#[tokio::test]
async fn test_multiple_items_total() {
    let (outcome, output, size) = session("1\n2\ny\n2\n4\nY\n1\n1\nn\n").await;

    assert_eq!(size, 3);
    assert!(output.contains("Total Harga: Rp160.00\n"));
    assert_eq!(output.matches("Ditambahkan ").count(), 3);

    // Lines may be stored in any order; the decoded summary lists all of them.
    let decoded = decode_summary(encoded_payload(&output)).unwrap();
    assert!(decoded.contains("{Nasi Goreng 20 2}"));
    assert!(decoded.contains("{Mie Kuah 25 4}"));
    assert!(decoded.contains("{Nasi Goreng 20 1}"));
    assert!(decoded.ends_with("Total Harga: Rp160.00"));
    assert!(matches!(outcome, SessionOutcome::Completed { .. }));
}

/// A non-numeric selection is reported and never reaches the quantity or continue prompts.
#[tokio::test]
async fn test_bad_selection() {
    let (_, output, size) = session("abc\n").await;

    assert_eq!(size, 0);
    assert!(output.contains("Pulih dari kesalahan: Format pilihan yang dimasukkan tidak valid.\n"));
    assert!(!output.contains("Masukkan jumlah"));
    assert!(!output.contains("Ingin memesan item lain?"));
    assert!(output.contains("Total Harga: Rp0.00\n"));
}

#[tokio::test]
async fn test_out_of_range_selection_then_valid_item() {
    let (_, output, size) = session("3\n2\n1\nn\n").await;

    assert_eq!(size, 1);
    assert!(output.contains("Pulih dari kesalahan: Pilihan item yang tidak valid.\n"));
    assert!(output.contains("Total Harga: Rp25.00\n"));
}

/// Bytes that are not UTF-8 only spoil the current attempt.
#[tokio::test]
async fn test_invalid_utf8_keeps_session() {
    let catalog = MenuCatalog::new(vec![
        MenuItem::new("Nasi Goreng", 20.0),
        MenuItem::new("Mie Kuah", 25.0),
    ]);
    let system = OrderSystem::with_catalog(Config::default(), catalog);
    let mut input = BufReader::new(&b"1\n3\ny\n\xff\n2\n1\nn\n"[..]);
    let mut output = Vec::new();
    let outcome = system
        .run_session(&mut input, &mut output)
        .await
        .expect("Session failed");
    assert_eq!(system.shutdown().await.unwrap().len(), 2);

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Pulih dari kesalahan: Format pilihan yang dimasukkan tidak valid.\n"));
    assert!(output.contains("Total Harga: Rp85.00\n"));
    assert!(matches!(outcome, SessionOutcome::Completed { .. }));
}

/// Declining straight away still produces a total and an encoded summary.
#[tokio::test]
async fn test_empty_order() {
    let (outcome, output, size) = session("").await;

    assert_eq!(size, 0);
    assert!(!output.contains("Item: "));
    assert!(output.contains("Total Harga: Rp0.00\n"));
    let decoded = decode_summary(encoded_payload(&output)).unwrap();
    assert_eq!(decoded, "Pesanan: []\nTotal Harga: Rp0.00");
    assert!(matches!(outcome, SessionOutcome::Completed { .. }));
}

/// Workers that cannot finish within the bound: no totals, no receipt.
#[tokio::test]
async fn test_timeout_skips_aggregation() {
    let catalog = MenuCatalog::default();
    let config = Config::default().with_join_timeout(Duration::from_millis(100));

    // The actor is kept alive but never run, so appends are never acknowledged.
    let (_stalled_actor, client) = order_actor::new(4, Arc::new(catalog.clone()));

    let mut input = BufReader::new(&b"1\n2\ny\n2\n1\nn\n"[..]);
    let mut output = Vec::new();
    let outcome = run_session(&catalog, &config, &client, &mut input, &mut output)
        .await
        .unwrap();

    assert_eq!(outcome, SessionOutcome::TimedOut);
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Pemrosesan pesanan terlalu lama.\n"));
    assert!(!output.contains("Total Harga"));
    assert!(!output.contains("Pesanan Terencoded"));
    assert!(output.ends_with("Program selesai.\n"));
}
