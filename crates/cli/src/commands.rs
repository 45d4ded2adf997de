use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run a predicate against a JSON task file and print the matches
    Query {
        #[arg(long, help = "Path to a JSON file holding an array of tasks")]
        file: String,

        #[arg(long, help = "Predicate expression to compile and run")]
        predicate: String,

        #[arg(
            long = "arg",
            help = "Substitution value for the next '%@' placeholder; repeatable, consumed in order"
        )]
        args: Vec<String>,

        #[arg(long, help = "Sort the matches by this field")]
        sort: Option<String>,

        #[arg(long, help = "Sort descending instead of ascending")]
        desc: bool,

        #[arg(long, help = "Print only the first match")]
        first: bool,

        #[arg(
            long,
            help = "Print the compiled SQL WHERE clause instead of executing"
        )]
        sql: bool,
    },
    /// Print the parsed predicate AST as JSON
    Ast {
        #[arg(long, help = "Predicate expression to parse")]
        predicate: String,

        #[arg(
            long = "arg",
            help = "Substitution value for the next '%@' placeholder; repeatable, consumed in order"
        )]
        args: Vec<String>,
    },
    /// Parse and validate a predicate against the task schema without running it
    Check {
        #[arg(long, help = "Predicate expression to validate")]
        predicate: String,

        #[arg(
            long = "arg",
            help = "Substitution value for the next '%@' placeholder; repeatable, consumed in order"
        )]
        args: Vec<String>,
    },
}
