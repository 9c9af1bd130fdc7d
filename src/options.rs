use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{'.rs': 120, '': 4}` on a single line
    #[default]
    Dict,
    /// Compact JSON object on a single line
    Json,
    Yaml,
    /// Aligned columns with a TOTAL line
    Table,
}
