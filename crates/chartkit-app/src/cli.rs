use clap::Parser;

/// chartkit — generate scoped theme stylesheets for dashboard charts.
#[derive(Parser, Debug)]
#[command(name = "chartkit", version, about)]
pub struct Args {
    /// Chart instance id, used in the `[data-chart=...]` selector.
    #[arg(short = 's', long)]
    pub scope: String,

    /// Theme name (searched in ./themes and the config dir) or file path.
    #[arg(short = 't', long)]
    pub theme: String,

    /// Wrap the output in a `<style>` element.
    #[arg(long)]
    pub wrap: bool,

    /// Regenerate every time the theme file changes.
    #[arg(short = 'w', long)]
    pub watch: bool,

    /// Write an example theme to the `--theme` path if it does not exist.
    #[arg(long)]
    pub init: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_arguments() {
        let args = Args::try_parse_from(["chartkit", "--scope", "revenue", "--theme", "sales"])
            .unwrap();
        assert_eq!(args.scope, "revenue");
        assert_eq!(args.theme, "sales");
        assert!(!args.wrap);
        assert!(!args.watch);
        assert!(!args.init);
        assert_eq!(args.log_level, None);
    }

    #[test]
    fn parses_short_flags() {
        let args = Args::try_parse_from([
            "chartkit", "-s", "c1", "-t", "./t.yaml", "-w", "--wrap", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(args.scope, "c1");
        assert_eq!(args.theme, "./t.yaml");
        assert!(args.watch);
        assert!(args.wrap);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn scope_and_theme_are_required() {
        assert!(Args::try_parse_from(["chartkit", "--scope", "c1"]).is_err());
        assert!(Args::try_parse_from(["chartkit", "--theme", "sales"]).is_err());
    }
}
