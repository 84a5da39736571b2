use anyhow::Result;
use wordpass_password::{
    compose, Error, GeneratorConfig, Mode, SecureRandom, WordCorpus,
};
use wordpass_unit_tests::{animals, MinimumRandom, ScriptedRandom};

fn config(
    number_of_words: usize,
    special_characters: Vec<char>,
) -> GeneratorConfig {
    GeneratorConfig {
        number_of_words,
        include_special_character: !special_characters.is_empty(),
        special_characters,
        uppercase_first_letter_of_one_word: false,
        ..Default::default()
    }
}

#[test]
fn separated_scripted() -> Result<()> {
    let corpus: WordCorpus = ["cat", "dog", "owl"][..].into();
    let rng = ScriptedRandom::new([
        0, 1, 2, // words: cat, dog, owl
        0, 0, // special '!'
        1, 2, 4, 2, // two digits: 4, 2
    ]);
    let password =
        compose(Mode::Separated, &config(3, vec!['!']), &corpus, &rng)?;
    assert_eq!("cat!dog42owl", password);
    assert_eq!(0, rng.remaining());
    Ok(())
}

#[test]
fn separated_without_special() -> Result<()> {
    let corpus: WordCorpus = ["cat", "dog"][..].into();
    // no coin toss when special characters are disabled
    let rng = ScriptedRandom::new([0, 1, 1, 5]);
    let password =
        compose(Mode::Separated, &config(2, vec![]), &corpus, &rng)?;
    assert_eq!("cat5dog", password);
    assert_eq!(0, rng.remaining());
    Ok(())
}

#[test]
fn separated_minimum_random() -> Result<()> {
    let corpus: WordCorpus = ["cat", "dog"][..].into();
    let password = compose(
        Mode::Separated,
        &config(3, vec!['#', '!']),
        &corpus,
        &MinimumRandom,
    )?;
    assert_eq!("cat#cat#cat", password);
    Ok(())
}

#[test]
fn separated_single_word() -> Result<()> {
    let corpus: WordCorpus = ["cat"][..].into();
    let uppercase = GeneratorConfig {
        uppercase_first_letter_of_one_word: true,
        ..config(1, vec!['!'])
    };
    let password =
        compose(Mode::Separated, &uppercase, &corpus, &SecureRandom)?;
    assert_eq!("Cat", password);
    Ok(())
}

#[test]
fn separated_no_words() {
    let corpus: WordCorpus = ["cat"][..].into();
    let result =
        compose(Mode::Separated, &config(0, vec![]), &corpus, &SecureRandom);
    assert!(matches!(result, Err(Error::EmptySelection)));
}

#[test]
fn separated_properties() -> Result<()> {
    let corpus = WordCorpus::new(animals());
    let pool = vec!['~', '!', '@'];
    let config = GeneratorConfig {
        uppercase_first_letter_of_one_word: true,
        ..config(4, pool.clone())
    };

    for _ in 0..200 {
        let password =
            compose(Mode::Separated, &config, &corpus, &SecureRandom)?;
        assert!(!password.contains(' '));

        let first = password.chars().next().unwrap();
        let last = password.chars().last().unwrap();
        assert!(first.is_alphabetic(), "{}", password);
        assert!(last.is_alphabetic(), "{}", password);

        let words: Vec<&str> = password
            .split(|c: char| !c.is_alphabetic())
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(4, words.len(), "{}", password);

        let separators: Vec<&str> = password
            .split(char::is_alphabetic)
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(3, separators.len(), "{}", password);
        for separator in separators {
            let is_special = separator.chars().count() == 1
                && pool.contains(&separator.chars().next().unwrap());
            let is_digits = (1..=2).contains(&separator.len())
                && separator.chars().all(|c| c.is_ascii_digit());
            assert!(is_special || is_digits, "{}", password);
        }

        let upper = password.chars().filter(|c| c.is_uppercase()).count();
        assert_eq!(1, upper, "{}", password);
    }
    Ok(())
}
