use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("goto-window")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pick one of a host application's windows and give it input focus")
        .long_about("goto-window lists the open windows of a multi-window host application (described by a JSON state snapshot), resolves the user's pick back to a window, and runs the platform-specific activation sequence. Host-side actions are printed as JSON for the host bridge to replay.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List the host's windows in display order")
                .arg(state_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("select")
                .about("Activate the window at a list index")
                .arg(
                    Arg::new("index")
                        .help("Index from 'goto-window list'; omit to record a cancelled selection")
                        .value_parser(value_parser!(usize))
                        .index(1)
                )
                .arg(state_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Print external commands instead of launching them")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("config")
                .about("Print the effective configuration")
                .arg(config_arg())
        )
}

fn state_arg() -> Arg {
    Arg::new("state")
        .long("state")
        .short('s')
        .help("Host state snapshot (JSON); '-' reads stdin")
        .required(true)
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("Config file (default: $GOTO_WINDOW_CONFIG or ~/.goto-window/config.toml)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_cli_select_parses_index() {
        let matches = build_cli()
            .try_get_matches_from(vec!["goto-window", "select", "2", "--state", "s.json"])
            .unwrap();
        let sub = matches.subcommand_matches("select").unwrap();
        assert_eq!(sub.get_one::<usize>("index"), Some(&2));
        assert_eq!(
            sub.get_one::<String>("state").map(String::as_str),
            Some("s.json")
        );
        assert!(!sub.get_flag("dry-run"));
    }

    #[test]
    fn test_cli_select_rejects_negative_index() {
        let result =
            build_cli().try_get_matches_from(vec!["goto-window", "select", "-1", "--state", "s.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_list_requires_state() {
        let result = build_cli().try_get_matches_from(vec!["goto-window", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_verbose_is_global() {
        let matches = build_cli()
            .try_get_matches_from(vec!["goto-window", "list", "-v", "--state", "s.json", "--json"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }
}
