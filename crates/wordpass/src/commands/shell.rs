use crate::{
    commands::{corpus_source, load_config},
    helpers::{
        batch::run_batch,
        messages,
        readline::{prompt_value, PromptValue},
    },
    Result,
};
use std::{
    io::{self, Write},
    path::PathBuf,
    time::Instant,
};
use wordpass_password::{
    GeneratorConfig, Mode, PasswordGenerator, MAX_COMPLEXITY,
};

const DEFAULT_COMPLEXITY: usize = 2;
const DEFAULT_BATCH: usize = 10;

/// Prompt for a value, re-prompting when the predicate fails.
fn prompt_checked<T: PromptValue + Clone>(
    prompt: &str,
    default: T,
    check: impl Fn(&T) -> std::result::Result<(), String>,
) -> Result<T> {
    loop {
        let value = prompt_value(prompt, default.clone())?;
        match check(&value) {
            Ok(_) => return Ok(value),
            Err(e) => messages::fail(format!(
                "invalid input: {}, please try again",
                e
            )),
        }
    }
}

fn prompt_config(
    defaults: &GeneratorConfig,
) -> Result<(Mode, GeneratorConfig)> {
    let mode = prompt_value(
        "Mode (1 = interleaved, 2 = separated)",
        Mode::default(),
    )?;
    let include_special_character = prompt_value(
        "Use one special character",
        defaults.include_special_character,
    )?;
    let uppercase_first_letter_of_one_word = prompt_value(
        "Set one word as uppercase",
        defaults.uppercase_first_letter_of_one_word,
    )?;
    let complexity = prompt_checked(
        &format!(
            "Complexity of words used (1 least complex - {} most complex)",
            MAX_COMPLEXITY
        ),
        DEFAULT_COMPLEXITY,
        |level| {
            if (1..=MAX_COMPLEXITY).contains(level) {
                Ok(())
            } else {
                Err(format!("expected a level from 1 to {}", MAX_COMPLEXITY))
            }
        },
    )?;
    let allow_spaces =
        prompt_value("Spaces between words", defaults.allow_spaces)?;
    let number_of_words = prompt_checked(
        "Number of words",
        defaults.number_of_words,
        |words| {
            if mode == Mode::Separated && *words == 0 {
                Err("separated passwords need at least one word".to_owned())
            } else {
                Ok(())
            }
        },
    )?;
    let number_of_numbers =
        prompt_value("Number of numbers", defaults.number_of_numbers)?;

    let config = GeneratorConfig {
        max_read_lines: GeneratorConfig::lines_for_complexity(complexity),
        number_of_words,
        number_of_numbers,
        allow_spaces,
        include_special_character,
        special_characters: defaults.special_characters.clone(),
        uppercase_first_letter_of_one_word,
    };
    Ok((mode, config))
}

/// Interactive password generator.
pub fn run(
    corpus: Option<PathBuf>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let defaults = load_config(config.as_deref())?;

    println!("Password Generator");
    let (mode, config) = match prompt_config(&defaults) {
        Ok(result) => result,
        Err(e) if e.is_interrupted() => return Ok(()),
        Err(e) => return Err(e),
    };

    let start = Instant::now();
    print!("Parsing words... ");
    io::stdout().flush()?;
    let mut generator = PasswordGenerator::new(config);
    let words = generator.load(&corpus_source(corpus))?;
    println!("Completed in {}ms.", start.elapsed().as_millis());
    tracing::debug!(words = words, mode = %mode, "shell::load");

    loop {
        let count = match prompt_checked(
            "Enter number of passwords to generate",
            DEFAULT_BATCH,
            |count| {
                if *count > 0 {
                    Ok(())
                } else {
                    Err("expected at least one password".to_owned())
                }
            },
        ) {
            Ok(count) => count,
            Err(e) if e.is_interrupted() => return Ok(()),
            Err(e) => return Err(e),
        };

        let summary = run_batch(&generator, mode, count, output.as_deref())?;

        println!();
        let msg = format!(
            "Generated {} passwords in {}ms.",
            summary.generated,
            summary.elapsed.as_millis()
        );
        if summary.cancelled {
            messages::warn(format!("{} (cancelled)", msg));
        } else {
            println!("{}", msg);
        }
    }
}
