use std::path::PathBuf;

use clap::Parser;

/// Search the job catalog from the command line.
#[derive(Debug, Clone, Parser)]
#[command(name = "job-search", version, about)]
pub struct Args {
    /// Free-text search, sent after the filters are applied.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Employment type token, e.g. FULLTIME. Repeat to select several.
    #[arg(short = 't', long = "employment-type", value_name = "TOKEN")]
    pub employment_types: Vec<String>,

    /// Minimum package token, e.g. 1000000.
    #[arg(short = 'p', long, value_name = "TOKEN")]
    pub salary_range: Option<String>,

    /// Bearer token for the catalog API.
    #[arg(long, env = "JOB_SEARCH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Catalog base URL; overrides the settings file.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Settings file in RON format. Defaults to ./job_search.ron when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How many times to retry after a failed fetch.
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Print results as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Log level (error, warn, info, debug, trace); overrides the settings file.
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_employment_types_keep_order() {
        let args = Args::try_parse_from([
            "job-search",
            "-t",
            "PARTTIME",
            "--employment-type",
            "FULLTIME",
            "--salary-range",
            "2000000",
            "--search",
            "designer",
        ])
        .unwrap();

        assert_eq!(args.employment_types, vec!["PARTTIME", "FULLTIME"]);
        assert_eq!(args.salary_range.as_deref(), Some("2000000"));
        assert_eq!(args.search.as_deref(), Some("designer"));
        assert_eq!(args.retries, 0);
        assert!(!args.json);
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
