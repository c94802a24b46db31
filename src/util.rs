use std::fmt::Display;

use clap::{ArgMatches, value_t};
use serde_json::Value;

use crate::error::ExportError;
use crate::graph::Clique;

/** command line parameters of the clique enumeration executable */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// graph definition file
    pub inst_filename: String,
    /// degeneracy ordering at the outermost level
    pub use_degeneracy: bool,
    /// pivot environment at every level
    pub use_pivot: bool,
    /// do not print the algorithm steps
    pub quiet: bool,
    /// split the outermost loop over the thread pool
    pub parallel: bool,
    /// where to write the cliques
    pub sol_file: Option<String>,
    /// where to write the search statistics
    pub perf_file: Option<String>,
}

/** reads command line input. Exits with a usage message if a flag is not a boolean. */
pub fn read_params(main_args:&ArgMatches) -> Params {
    let inst_filename = main_args.value_of("instance").unwrap_or_default().to_string();
    let use_degeneracy = value_t!(main_args, "degeneracy", bool).unwrap_or_else(|e| e.exit());
    let use_pivot = value_t!(main_args, "pivot", bool).unwrap_or_else(|e| e.exit());
    // read value of the solution filename
    let sol_file: Option<String> = match main_args.value_of("solution") {
        None => None,
        Some(e) => {
            println!("printing solutions in: {}", e);
            Some(e.to_string())
        }
    };
    // read value of the performance logs filename
    let perf_file: Option<String> = match main_args.value_of("perf") {
        None => None,
        Some(e) => {
            println!("printing perfs in: {}\n", e);
            Some(e.to_string())
        }
    };
    Params {
        inst_filename,
        use_degeneracy,
        use_pivot,
        quiet: main_args.is_present("quiet"),
        parallel: main_args.is_present("parallel"),
        sol_file,
        perf_file,
    }
}

/// cliques as a JSON list of lists of vertex names
pub fn cliques_to_json<V:Display>(cliques:&[Clique<V>]) -> Value {
    let lists:Vec<Vec<String>> = cliques.iter()
        .map(|c| c.iter().map(|v| v.to_string()).collect())
        .collect();
    Value::from(lists)
}

fn write_json(filename:&str, value:&Value) -> Result<(), ExportError> {
    let content = serde_json::to_string(value)?;
    std::fs::write(filename, content)
        .map_err(|source| ExportError::Io { path: filename.to_string(), source })
}

/// exports search results to files
pub fn export_results(
    solution:&Value,
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<(), ExportError> {
    if let Some(filename) = perf_file {
        write_json(filename, stats)?;
    }
    if let Some(filename) = sol_file {
        write_json(filename, solution)?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use clap::{App, load_yaml};
    use serde_json::json;

    fn parse(args:&[&str]) -> Result<Params, clap::Error> {
        let yaml = load_yaml!("bin/bron_kerbosch.yml");
        App::from_yaml(yaml).get_matches_from_safe(args).map(|m| read_params(&m))
    }

    #[test]
    fn test_read_params() {
        let params = parse(&["bron_kerbosch", "insts/path.txt", "true", "false", "--quiet"]).unwrap();
        assert_eq!(params, Params {
            inst_filename: "insts/path.txt".to_string(),
            use_degeneracy: true,
            use_pivot: false,
            quiet: true,
            parallel: false,
            sol_file: None,
            perf_file: None,
        });
        let params = parse(&["bron_kerbosch", "g.txt", "false", "true", "--parallel", "-s", "sol.json"]).unwrap();
        assert!(params.parallel);
        assert!(params.use_pivot);
        assert_eq!(params.sol_file, Some("sol.json".to_string()));
    }

    #[test]
    fn test_wrong_arity_or_values() {
        assert!(parse(&["bron_kerbosch", "insts/path.txt", "true"]).is_err());
        assert!(parse(&["bron_kerbosch", "insts/path.txt", "true", "false", "extra"]).is_err());
        assert!(parse(&["bron_kerbosch", "insts/path.txt", "yes", "false"]).is_err());
    }

    #[test]
    fn test_export_results() {
        let cliques:Vec<Clique<&str>> = vec![
            vec!["a","b"].into_iter().collect(),
            vec!["c"].into_iter().collect(),
        ];
        let solution = json!({ "maximal_cliques": cliques_to_json(&cliques) });
        assert_eq!(solution.to_string(), r#"{"maximal_cliques":[["a","b"],["c"]]}"#);
        let path = std::env::temp_dir().join("bk_cliques_export_test.json");
        let filename = path.to_str().unwrap();
        export_results(&solution, &json!({}), None, Some(filename)).unwrap();
        let written:Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, solution);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            export_results(&solution, &json!({}), Some("/nonexistent-dir/perf.json"), None),
            Err(ExportError::Io { .. })
        ));
    }
}
