use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const CSV_PATH: &str = "updated_dataset 1.4.csv";
const PARQUET_PATH: &str = "updated_dataset 1.4.parquet";

const NUMERIC_COLUMNS: [&str; 9] = [
    "based on Avg Sales",
    "based on forecast",
    "avg. Daily sales (7 days)",
    "avg. Daily sales (30 days)",
    "FBA Stock",
    "3PL Stock",
    "FBA Pending",
    "basedonforecast.2",
    "basedonAvgSales.2",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `[lo, hi]`.
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo + 1) as u64) as i64
    }
}

struct Listing {
    brand: &'static str,
    asin: String,
    numbers: [i64; 9],
}

fn generate(rng: &mut SimpleRng) -> Vec<Listing> {
    // "Crème" exercises the Latin-1 path of the CSV loader.
    let brands = ["Northwind", "Crème Co", "Acme", "Globex"];
    let mut listings = Vec::new();

    for (b, &brand) in brands.iter().enumerate() {
        for k in 0..6 {
            let daily_30 = rng.range(0, 40);
            let daily_7 = (daily_30 + rng.range(-10, 12)).max(0);
            let avg_sales = daily_30 * 30;
            let forecast = daily_7 * 30;
            let fba = rng.range(0, 900);
            let tpl = rng.range(0, 400);
            let pending = rng.range(0, 150);
            listings.push(Listing {
                brand,
                asin: format!("B0{b}{:07X}", rng.range(0, 0xFFFFFFF - 6) + k),
                numbers: [
                    avg_sales,
                    forecast,
                    daily_7,
                    daily_30,
                    fba,
                    tpl,
                    pending,
                    forecast + rng.range(-50, 50),
                    avg_sales + rng.range(-50, 50),
                ],
            });
        }
    }
    listings
}

/// Encode text as ISO-8859-1; characters past U+00FF become `?`.
fn to_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

fn write_csv(listings: &[Listing]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let mut header = vec!["Brand", "ASIN"];
    header.extend(NUMERIC_COLUMNS);
    writer.write_record(&header)?;

    for l in listings {
        let mut row = vec![l.brand.to_string(), l.asin.clone()];
        row.extend(l.numbers.iter().map(|n| n.to_string()));
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV writer: {e}"))?;
    let text = String::from_utf8(bytes).context("CSV writer produced invalid UTF-8")?;
    std::fs::write(CSV_PATH, to_latin1(&text)).with_context(|| format!("writing {CSV_PATH}"))?;
    Ok(())
}

fn write_parquet(listings: &[Listing]) -> Result<()> {
    let mut fields = vec![
        Field::new("Brand", DataType::Utf8, false),
        Field::new("ASIN", DataType::Utf8, false),
    ];
    let mut columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(
            listings.iter().map(|l| l.brand).collect::<Vec<_>>(),
        )),
        Arc::new(StringArray::from(
            listings.iter().map(|l| l.asin.as_str()).collect::<Vec<_>>(),
        )),
    ];
    for (i, name) in NUMERIC_COLUMNS.iter().enumerate() {
        fields.push(Field::new(*name, DataType::Int64, false));
        columns.push(Arc::new(Int64Array::from(
            listings.iter().map(|l| l.numbers[i]).collect::<Vec<_>>(),
        )));
    }

    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let file = std::fs::File::create(PARQUET_PATH)
        .with_context(|| format!("creating {PARQUET_PATH}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let listings = generate(&mut rng);

    write_csv(&listings)?;
    write_parquet(&listings)?;

    println!(
        "Wrote {} listings to '{CSV_PATH}' (Latin-1) and '{PARQUET_PATH}'",
        listings.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_asins_are_ten_characters() {
        for seed in [0, 42, 7_777] {
            let listings = generate(&mut SimpleRng::new(seed));
            assert_eq!(listings.len(), 24);
            for l in &listings {
                assert_eq!(l.asin.len(), 10, "{}", l.asin);
            }
        }
    }
}
