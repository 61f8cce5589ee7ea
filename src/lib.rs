use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NotAnInteger(String),
    NotPositive(i64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotAnInteger(s) => write!(f, "Given text({}) isn't an integer.", s),
            Error::NotPositive(n) => write!(f, "Given integer({}) isn't positive.", n),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Invalid,
    Deficient,
    Perfect,
    Abundant,
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Invalid => write!(f, "not a positive integer"),
            Classification::Deficient => write!(f, "a defective number"),
            Classification::Perfect => write!(f, "a perfect number"),
            Classification::Abundant => write!(f, "an abundant number"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveInt {
    n: u64,
}

impl TryFrom<&str> for PositiveInt {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let n = value
            .parse::<i64>()
            .map_err(|_| Error::NotAnInteger(value.to_string()))?;
        if n <= 0 {
            return Err(Error::NotPositive(n));
        }

        Ok(Self { n: n as u64 })
    }
}

impl PositiveInt {
    pub fn new(n: u64) -> std::result::Result<Self, Error> {
        if n == 0 {
            Err(Error::NotPositive(0))
        } else {
            Ok(Self { n })
        }
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    // If i is a divisor of n then n / i is as well, and one of the pair is at
    // most sqrt(n), so trying each i up to isqrt(n) finds both. The exact
    // square root pairs with itself and is added only once.
    pub fn proper_divisor_sum(&self) -> u64 {
        let root = self.n.isqrt();
        let mut sum = 1;
        for i in 2..=root {
            if self.n % i == 0 {
                sum += i;
                if i * i != self.n {
                    sum += self.n / i;
                }
            }
        }

        sum
    }

    pub fn classify(&self) -> Classification {
        let sum = self.proper_divisor_sum();
        // 1 has no proper divisor at all, so it counts as deficient even
        // though the accumulator starts at 1.
        if sum < self.n || self.n == 1 {
            Classification::Deficient
        } else if sum == self.n {
            Classification::Perfect
        } else {
            Classification::Abundant
        }
    }
}

pub fn classify_item(item: &str) -> Classification {
    match PositiveInt::try_from(item) {
        Ok(n) => n.classify(),
        Err(_) => Classification::Invalid,
    }
}

pub fn classify_all<'a, I>(items: I) -> Vec<(&'a str, Classification)>
where
    I: IntoIterator<Item = &'a str>,
{
    items
        .into_iter()
        .map(|item| (item, classify_item(item)))
        .collect()
}

pub fn read_items<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut items = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        items.extend(line.split_whitespace().map(|token| token.to_string()));
    }

    Ok(items)
}

#[test]
fn test_classify_one_as_deficient() {
    assert!(PositiveInt::new(1).unwrap().classify() == Classification::Deficient);
}

#[test]
fn test_classify_perfect_numbers() {
    for n in [6, 28, 496, 8128] {
        assert!(PositiveInt::new(n).unwrap().classify() == Classification::Perfect);
    }
}

#[test]
fn test_classify_abundant_numbers() {
    assert!(PositiveInt::new(12).unwrap().classify() == Classification::Abundant);
    assert!(PositiveInt::new(12).unwrap().proper_divisor_sum() == 16);
}

#[test]
fn test_classify_primes_as_deficient() {
    for n in [2, 3, 7, 97] {
        assert!(PositiveInt::new(n).unwrap().classify() == Classification::Deficient);
        assert!(PositiveInt::new(n).unwrap().proper_divisor_sum() == 1);
    }
}

#[test]
fn test_square_root_divisor_counted_once() {
    assert!(PositiveInt::new(9).unwrap().proper_divisor_sum() == 1 + 3);
    assert!(PositiveInt::new(16).unwrap().proper_divisor_sum() == 1 + 2 + 4 + 8);
    assert!(PositiveInt::new(36).unwrap().proper_divisor_sum() == 1 + 2 + 3 + 4 + 6 + 9 + 12 + 18);
}

#[test]
fn test_invalid_items() {
    assert!(classify_item("0") == Classification::Invalid);
    assert!(classify_item("-5") == Classification::Invalid);
    assert!(classify_item("3.5") == Classification::Invalid);
    assert!(classify_item("x") == Classification::Invalid);
    assert!(PositiveInt::try_from("0") == Err(Error::NotPositive(0)));
    assert!(PositiveInt::try_from("x") == Err(Error::NotAnInteger("x".to_string())));
    assert!(PositiveInt::new(0) == Err(Error::NotPositive(0)));
}

#[test]
fn test_classify_all_keeps_order_and_length() {
    let items = ["6", "x", "12", "-5", "7"];
    let results = classify_all(items);
    assert!(
        results
            == vec![
                ("6", Classification::Perfect),
                ("x", Classification::Invalid),
                ("12", Classification::Abundant),
                ("-5", Classification::Invalid),
                ("7", Classification::Deficient),
            ]
    );
}
