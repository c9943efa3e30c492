use rand::Rng;
use std::fs::{self, File};
use std::io::{BufWriter, Write};

fn main() {
    let path = "data/flat-prices.csv";
    fs::create_dir_all("data").unwrap();
    let file = File::create(path).unwrap();
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "month,town,flat_type,block,street_name,storey_range,floor_area_sqm,flat_model,lease_commence_date,resale_price"
    )
    .unwrap();

    let towns = [
        "ANG MO KIO",
        "BEDOK",
        "BISHAN",
        "CLEMENTI",
        "JURONG WEST",
        "TAMPINES",
        "WOODLANDS",
        "YISHUN",
    ];
    let flat_types = ["1 ROOM", "2 ROOM", "3 ROOM", "4 ROOM", "5 ROOM", "EXECUTIVE"];
    let storey_ranges = ["01 TO 03", "04 TO 06", "07 TO 09", "10 TO 12", "13 TO 15"];
    let flat_models = ["IMPROVED", "NEW GENERATION", "MODEL A", "STANDARD", "SIMPLIFIED"];
    let block_suffixes = ["A", "B", "C", "D"];

    let mut rng = rand::rng();
    for _ in 0..1_000_000 {
        let month = format!(
            "{}-{:02}",
            rng.random_range(1990..2021),
            rng.random_range(1..13)
        );
        let town = towns[rng.random_range(0..towns.len())];
        let flat_type = flat_types[rng.random_range(0..flat_types.len())];
        let block = format!(
            "{}{}",
            rng.random_range(1..999),
            block_suffixes[rng.random_range(0..block_suffixes.len())]
        );
        let street_name = format!("{} AVE {}", town, rng.random_range(1..12));
        let storey_range = storey_ranges[rng.random_range(0..storey_ranges.len())];
        let floor_area_sqm = rng.random_range(310..1600) as f64 / 10.0;
        let flat_model = flat_models[rng.random_range(0..flat_models.len())];
        let lease_commence_date = rng.random_range(1966..2000);
        let resale_price: u32 = rng.random_range(5_000..900_000);
        writeln!(
            writer,
            "{month},{town},{flat_type},{block},{street_name},{storey_range},{floor_area_sqm:.1},{flat_model},{lease_commence_date},{resale_price}"
        )
        .unwrap();
    }

    println!("Sample CSV generated: {}", path);
}
