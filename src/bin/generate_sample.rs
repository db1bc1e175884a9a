//! Writes a synthetic advisor table in the layout the dashboard reads.
//!
//! Usage: `cargo run --bin generate_sample [output.csv]`

use anyhow::{Context, Result};

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
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

const HEADER: [&str; 9] = [
    "CRD",
    "Primary Business Name",
    "City",
    "State",
    "Total",
    "Total Number of Accounts",
    "Accts-Individuals",
    "Accts-Corps",
    "Accts-Pensions",
];

const LOCATIONS: [(&str, &str); 10] = [
    ("New York", "NY"),
    ("Boston", "MA"),
    ("Chicago", "IL"),
    ("San Francisco", "CA"),
    ("San José", "CA"),
    ("Austin", "TX"),
    ("Denver", "CO"),
    ("Miami", "FL"),
    ("Coeur d'Alène", "ID"),
    ("Seattle", "WA"),
];

const NAME_STEMS: [&str; 8] = [
    "Harbor", "Summit", "Cedar", "Beacon", "Granite", "Meridian", "Crestview", "Café",
];
const NAME_SUFFIXES: [&str; 5] = [
    "Capital Advisors",
    "Wealth Management",
    "Asset Partners",
    "Financial Group",
    "Investment Counsel",
];

/// `1234567.5` → `$1,234,567.50`
fn dollars(value: f64) -> String {
    let cents = format!("{value:.2}");
    let (int_part, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}.{frac}")
}

/// ISO-8859-1 bytes; the source exports this dashboard reads are Latin-1.
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

fn optional_count(rng: &mut SimpleRng, served: f64, max: usize) -> String {
    if rng.chance(served) {
        rng.below(max).to_string()
    } else {
        String::new()
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "finalDataSet.csv".to_string());
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(HEADER)?;

    let n_rows = 250;
    for i in 0..n_rows {
        let (city, state) = LOCATIONS[rng.below(LOCATIONS.len())];
        let name = format!(
            "{} {}",
            NAME_STEMS[rng.below(NAME_STEMS.len())],
            NAME_SUFFIXES[rng.below(NAME_SUFFIXES.len())]
        );

        // Log-uniform AUM between $1MM and ~$3B so every band is populated.
        let aum = 1e6 * 3000f64.powf(rng.next_f64());
        let total = match i % 50 {
            0 => String::new(),
            25 => "n/a".to_string(),
            _ => dollars(aum.round()),
        };

        let individuals = optional_count(&mut rng, 0.85, 5_000);
        let corps = optional_count(&mut rng, 0.5, 400);
        let pensions = optional_count(&mut rng, 0.35, 150);
        let accounts: usize = [&individuals, &corps, &pensions]
            .iter()
            .filter_map(|c| c.parse::<usize>().ok())
            .sum();

        let row = [
            (100_000 + i * 37).to_string(),
            name,
            city.to_string(),
            state.to_string(),
            total,
            accounts.to_string(),
            individuals,
            corps,
            pensions,
        ];
        let bytes: Vec<Vec<u8>> = row.iter().map(|field| latin1(field)).collect();
        writer.write_record(&bytes)?;
    }

    writer.flush()?;
    println!("Wrote {n_rows} advisor records to {output_path}");
    Ok(())
}
