use rs_randstr_core::{CharacterGroup, Error, GenerationOptions, RandomStringGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Fast generator: fine for ids and test data, never for secrets
    let fast = RandomStringGenerator::pseudo_random();

    // Cryptographic generator: reads the operating system entropy source
    let secure = RandomStringGenerator::cryptographic();

    // 32 characters from A-Z, a-z, 0-9, '-' and '_'
    println!("Default token: {}", secure.generate_default()?);

    // Any length with the default alphabet
    println!("Short token: {}", fast.generate_with_length(8)?);

    // Character groups can be combined
    let groups = CharacterGroup::UPPER_CASE_LETTERS | CharacterGroup::DIGITS;
    println!("Licence key: {}", secure.generate_from_group(20, groups, false)?);

    // Every allowed character at least once (length must be >= alphabet size)
    println!("Both letters: {}", fast.generate(10, &['A', 'B'], true)?);

    // The builder reads like a sentence
    let password = secure.generate_with(|builder| {
        builder
            .with_length(16)
            .allow_group(CharacterGroup::ALL_ALPHA_NUMERIC)
            .and_allow_group(CharacterGroup::SPECIAL_READABLE_ASCII)
            .exclude_characters(&['"', '\'', '`', '\\'])
            .exclude_similar_looking_characters()
    })?;
    println!("Password: {}", password);

    // Options are plain values, they can come from configuration
    let options = GenerationOptions::from_groups(6, CharacterGroup::DIGITS, false)?;
    println!("PIN: {}", secure.generate_options(&options)?);

    // Seeded generators replay the same sequence
    let replay_a = RandomStringGenerator::seeded(2024);
    let replay_b = RandomStringGenerator::seeded(2024);
    println!("Seeded: {} == {}", replay_a.generate_default()?, replay_b.generate_default()?);

    // Invalid requests fail before anything is drawn
    match fast.generate(2, &['A', 'B', 'C'], true) {
        Err(Error::InvalidOperation { length, minimum }) => {
            println!("Length {} is too short, at least {} is needed", length, minimum)
        }
        other => println!("Should not happen: {:?}", other),
    }
    match fast.generate(0, &['A'], false) {
        Err(e) => println!("Rejected: {}", e),
        Ok(_) => println!("Should not happen"),
    }

    Ok(())
}
