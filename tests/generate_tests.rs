use cellular::DomainError;
use cellular::Error;
use cellular::generate;

#[test]
fn rule_30_five_steps() -> anyhow::Result<()> {
    let image = generate(30, 5)?;

    insta::assert_snapshot!(image.trim_end(), @r"
    P1 11 6
    0 0 0 0 0 1 0 0 0 0 0
    0 0 0 0 1 1 1 0 0 0 0
    0 0 0 1 1 0 0 1 0 0 0
    0 0 1 1 0 1 1 1 1 0 0
    0 1 1 0 0 1 0 0 0 1 0
    1 1 0 1 1 1 1 0 1 1 1
    ");

    Ok(())
}

#[test]
fn one_newline_per_line() -> anyhow::Result<()> {
    let image = generate(30, 5)?;

    assert!(image.ends_with("1 1 1\n"));
    assert!(!image.contains("\n\n"));
    assert_eq!(image.lines().count(), 7);

    Ok(())
}

#[test]
fn rule_90_sierpinski() -> anyhow::Result<()> {
    let image = generate(90, 3)?;

    assert_eq!(
        image,
        "P1 7 4\n\
         0 0 0 1 0 0 0\n\
         0 0 1 0 1 0 0\n\
         0 1 0 0 0 1 0\n\
         1 0 1 0 1 0 1\n"
    );

    Ok(())
}

#[test]
fn rule_out_of_range() {
    for rule in [256, -1, i64::MIN, i64::MAX] {
        match generate(rule, 5) {
            Err(Error::Domain(DomainError::RuleOutOfRange(n))) => assert_eq!(n, rule),
            res => panic!("expected a domain error for rule {rule}, got {res:?}"),
        }
    }
}

#[test]
fn negative_steps() {
    match generate(30, -1) {
        Err(Error::Domain(DomainError::NegativeSteps(-1))) => {}
        res => panic!("expected a domain error for steps -1, got {res:?}"),
    }
}

#[test]
fn rule_is_checked_before_steps() {
    assert!(matches!(
        generate(256, -1),
        Err(Error::Domain(DomainError::RuleOutOfRange(256)))
    ));
}
