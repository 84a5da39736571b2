use anyhow::Result;
use wordpass_password::{
    compose, Error, GeneratorConfig, Mode, SecureRandom, WordCorpus,
};
use wordpass_unit_tests::{animals, MinimumRandom, ScriptedRandom};

fn plain(number_of_words: usize, number_of_numbers: usize) -> GeneratorConfig {
    GeneratorConfig {
        number_of_words,
        number_of_numbers,
        allow_spaces: false,
        include_special_character: false,
        uppercase_first_letter_of_one_word: false,
        ..Default::default()
    }
}

fn has_spaced_digits(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| {
        w[0].is_ascii_digit() && w[1] == ' ' && w[2].is_ascii_digit()
    })
}

#[test]
fn interleaved_scripted_example() -> Result<()> {
    let corpus: WordCorpus = ["cat", "dog"][..].into();
    // words: cat, dog; digit: 0 at position 1
    let rng = ScriptedRandom::new([0, 1, 0, 1]);
    let password = compose(Mode::Interleaved, &plain(2, 1), &corpus, &rng)?;
    assert_eq!("cat0dog", password);
    assert_eq!(0, rng.remaining());
    Ok(())
}

#[test]
fn interleaved_minimum_random() -> Result<()> {
    let corpus: WordCorpus = ["cat", "dog"][..].into();
    let password =
        compose(Mode::Interleaved, &plain(2, 1), &corpus, &MinimumRandom)?;
    assert_eq!("cat0cat", password);
    Ok(())
}

#[test]
fn interleaved_squashes_adjacent_digits() -> Result<()> {
    let corpus: WordCorpus = ["cat"][..].into();
    let config = GeneratorConfig {
        allow_spaces: true,
        ..plain(1, 2)
    };
    // word: cat; digit 4 at position 1; digit 2 at position 2
    let rng = ScriptedRandom::new([0, 4, 1, 2, 2]);
    let password = compose(Mode::Interleaved, &config, &corpus, &rng)?;
    assert_eq!("cat 42", password);
    Ok(())
}

#[test]
fn interleaved_special_and_uppercase() -> Result<()> {
    let corpus: WordCorpus = ["cat", "dog"][..].into();
    let config = GeneratorConfig {
        number_of_words: 2,
        number_of_numbers: 1,
        allow_spaces: true,
        include_special_character: true,
        special_characters: vec!['!', '?'],
        uppercase_first_letter_of_one_word: true,
        ..Default::default()
    };
    let rng = ScriptedRandom::new([
        0, 1, // words: cat, dog
        1, // uppercase: dog
        7, 1, // digit 7 at position 1
        1, 3, // special '?' at the end
    ]);
    let password = compose(Mode::Interleaved, &config, &corpus, &rng)?;
    assert_eq!("cat 7 Dog ?", password);
    Ok(())
}

#[test]
fn interleaved_special_pool_empty() -> Result<()> {
    let corpus: WordCorpus = ["cat"][..].into();
    let config = GeneratorConfig {
        include_special_character: true,
        special_characters: vec![],
        ..plain(1, 0)
    };
    let password =
        compose(Mode::Interleaved, &config, &corpus, &SecureRandom)?;
    assert_eq!("cat", password);
    Ok(())
}

#[test]
fn interleaved_no_words() -> Result<()> {
    let corpus: WordCorpus = ["cat"][..].into();
    let password =
        compose(Mode::Interleaved, &plain(0, 0), &corpus, &SecureRandom)?;
    assert_eq!("", password);

    // nowhere to insert a digit without a leading word
    let result =
        compose(Mode::Interleaved, &plain(0, 1), &corpus, &SecureRandom);
    assert!(matches!(result, Err(Error::InvalidRange { min: 1, max: 1 })));
    Ok(())
}

#[test]
fn interleaved_digit_count() -> Result<()> {
    let corpus = WordCorpus::new(animals());
    for numbers in 0..6 {
        let config = GeneratorConfig {
            include_special_character: true,
            ..plain(3, numbers)
        };
        for _ in 0..50 {
            let password =
                compose(Mode::Interleaved, &config, &corpus, &SecureRandom)?;
            let digits =
                password.chars().filter(|c| c.is_ascii_digit()).count();
            assert_eq!(numbers, digits, "{}", password);
        }
    }
    Ok(())
}

#[test]
fn interleaved_properties() -> Result<()> {
    let corpus = WordCorpus::new(animals());
    let config = GeneratorConfig {
        number_of_words: 3,
        number_of_numbers: 4,
        allow_spaces: true,
        include_special_character: true,
        uppercase_first_letter_of_one_word: true,
        ..Default::default()
    };

    for _ in 0..200 {
        let password =
            compose(Mode::Interleaved, &config, &corpus, &SecureRandom)?;

        assert!(!has_spaced_digits(&password), "{}", password);

        let first = password.chars().next().unwrap();
        assert!(first.is_alphabetic(), "{}", password);

        let parts: Vec<&str> = password.split(' ').collect();
        let words: Vec<&str> = parts
            .iter()
            .copied()
            .filter(|part| part.chars().all(char::is_alphabetic))
            .collect();
        assert_eq!(3, words.len(), "{}", password);
        for word in &words {
            assert!(animals().contains(&word.to_lowercase()));
        }

        let specials: Vec<&str> = parts
            .iter()
            .copied()
            .filter(|part| {
                part.chars()
                    .all(|c| config.special_characters.contains(&c))
            })
            .collect();
        assert_eq!(1, specials.len(), "{}", password);
        assert_eq!(1, specials[0].chars().count());

        let digits = password.chars().filter(|c| c.is_ascii_digit()).count();
        assert_eq!(4, digits, "{}", password);

        let upper = password.chars().filter(|c| c.is_uppercase()).count();
        assert_eq!(1, upper, "{}", password);
    }
    Ok(())
}

#[test]
fn interleaved_without_spaces() -> Result<()> {
    let corpus = WordCorpus::new(animals());
    let config = GeneratorConfig {
        include_special_character: true,
        ..plain(4, 3)
    };
    for _ in 0..100 {
        let password =
            compose(Mode::Interleaved, &config, &corpus, &SecureRandom)?;
        assert!(!password.contains(' '));
        assert!(password.chars().next().unwrap().is_alphabetic());
    }
    Ok(())
}
