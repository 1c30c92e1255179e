use super::*;

#[test]
fn parses_lookup_with_single_address() {
    let cli = Cli::try_parse_from(["solarscope", "lookup", "1 Main St"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Lookup {
            addresses,
            mock_solar,
            skip_credential_check,
            json,
        } => {
            assert_eq!(addresses, vec!["1 Main St".to_string()]);
            assert!(!mock_solar);
            assert!(!skip_credential_check);
            assert!(!json);
        }
        Commands::Config => panic!("expected lookup"),
    }
}

#[test]
fn parses_lookup_flags_and_multiple_addresses() {
    let cli = Cli::try_parse_from([
        "solarscope",
        "lookup",
        "--mock-solar",
        "--skip-credential-check",
        "--json",
        "1 Main St",
        "10 Downing St",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Lookup {
            ref addresses,
            mock_solar: true,
            skip_credential_check: true,
            json: true,
        } if addresses.len() == 2
    ));
}

#[test]
fn lookup_accepts_blank_address_for_validation() {
    let cli = Cli::try_parse_from(["solarscope", "lookup", "   "]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Lookup { ref addresses, .. } if addresses[0] == "   "));
}

#[test]
fn lookup_requires_an_address() {
    assert!(Cli::try_parse_from(["solarscope", "lookup"]).is_err());
}

#[test]
fn parses_config_command() {
    let cli = Cli::try_parse_from(["solarscope", "config"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Config));
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["solarscope"]).is_err());
}
