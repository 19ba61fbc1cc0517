use anyhow::Result;
use intl_phone_input::{CountryRegistry, PhoneInputOptions, PhoneInputUI};

fn main() -> Result<()> {
    let registry = CountryRegistry::builtin();
    let options = PhoneInputOptions::default()
        .with_label("Phone number")
        .with_prompt("Select country");

    let submitted = PhoneInputUI::new(registry)
        .with_title("Sign in with your phone number")
        .with_options(options)
        .run()?;

    match submitted {
        Some(number) => println!("{number}"),
        None => println!("cancelled"),
    }
    Ok(())
}
