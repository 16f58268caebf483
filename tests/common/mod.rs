#![allow(dead_code)]

use hexcheckout::domain::order::Order;
use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["id", "amount"])?;

    for i in 1..=rows {
        wtr.write_record([format!("o-{i}"), (i * 10).to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Orders with unique ids and amounts drawn from `1..=max_amount`.
pub fn random_payable_orders(count: usize, max_amount: i64) -> Vec<Order> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| Order::new(format!("p-{i}"), rng.gen_range(1..=max_amount)))
        .collect()
}

/// Orders with unique ids and amounts drawn from `min_amount..=0`.
pub fn random_unpayable_orders(count: usize, min_amount: i64) -> Vec<Order> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| Order::new(format!("n-{i}"), rng.gen_range(min_amount..=0)))
        .collect()
}
