//! Benchmarks for the PIN-gated account operations
//!
//! Compares plain and salted credential storage, since every operation
//! verifies the PIN first.
//!
//! ```bash
//! cargo bench
//! ```

use chrono::NaiveDate;
use pin_bank::{Account, Client, CredentialStorage, Pin};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

const PIN: Pin = Pin::new(1234);

fn account(storage: CredentialStorage) -> Account {
    let client = Client::new(
        1,
        "Boszko",
        "Tom",
        NaiveDate::from_ymd_opt(1982, 7, 3).unwrap(),
        PIN,
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        storage,
    );
    Account::new(client, "Savings", Decimal::new(100000, 2))
}

#[divan::bench]
fn check_balance_plain(bencher: divan::Bencher) {
    let account = account(CredentialStorage::Plain);
    bencher.bench_local(|| account.check_balance(divan::black_box(PIN)));
}

#[divan::bench]
fn check_balance_salted(bencher: divan::Bencher) {
    let account = account(CredentialStorage::Salted);
    bencher.bench_local(|| account.check_balance(divan::black_box(PIN)));
}

#[divan::bench]
fn deposit_then_withdraw(bencher: divan::Bencher) {
    let mut account = account(CredentialStorage::Plain);
    let amount = Decimal::new(25050, 2);
    bencher.bench_local(|| {
        account.deposit(divan::black_box(amount)).unwrap();
        account.withdraw(divan::black_box(amount), PIN).unwrap()
    });
}

#[divan::bench]
fn insufficient_funds_withdrawal(bencher: divan::Bencher) {
    let mut account = account(CredentialStorage::Plain);
    let amount = Decimal::new(200000, 2);
    bencher.bench_local(|| account.withdraw(divan::black_box(amount), PIN).unwrap());
}
