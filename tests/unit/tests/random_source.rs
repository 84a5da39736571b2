use anyhow::Result;
use std::collections::HashSet;
use wordpass_password::{Error, RandomSource, SecureRandom};
use wordpass_unit_tests::MinimumRandom;

#[test]
fn random_in_range() -> Result<()> {
    let rng = SecureRandom;
    for (min, max) in [(0, 1), (0, 2), (1, 11), (5, 7), (0, 172_681)] {
        for _ in 0..200 {
            let value = rng.next_int(min, max)?;
            assert!((min..max).contains(&value));
        }
    }
    Ok(())
}

#[test]
fn random_wide_range() -> Result<()> {
    let rng = SecureRandom;
    let max = usize::MAX;
    for _ in 0..100 {
        assert!(rng.next_int(1, max)? < max);
    }
    Ok(())
}

#[test]
fn random_covers_small_range() -> Result<()> {
    let rng = SecureRandom;
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        seen.insert(rng.next_int(0, 3)?);
    }
    assert_eq!(3, seen.len());
    Ok(())
}

#[test]
fn random_invalid_range() {
    let rng = SecureRandom;
    assert!(matches!(
        rng.next_int(2, 2),
        Err(Error::InvalidRange { min: 2, max: 2 })
    ));
    assert!(matches!(
        rng.next_int(10, 0),
        Err(Error::InvalidRange { min: 10, max: 0 })
    ));
}

#[test]
fn random_minimum_stub() -> Result<()> {
    let rng = MinimumRandom;
    assert_eq!(0, rng.next_int(0, 10)?);
    assert_eq!(7, rng.next_int(7, 9)?);
    assert!(rng.next_int(9, 7).is_err());
    Ok(())
}

#[test]
fn random_concurrent() -> Result<()> {
    let rng = SecureRandom;
    std::thread::scope(|s| {
        let handles = (0..4)
            .map(|_| {
                s.spawn(|| {
                    for _ in 0..250 {
                        let value = rng.next_int(0, 10).unwrap();
                        assert!(value < 10);
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }
    });
    Ok(())
}
