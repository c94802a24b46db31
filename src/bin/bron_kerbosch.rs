use std::process;
use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use bk_cliques::loader::load_graph;
use bk_cliques::output::StandardOutput;
use bk_cliques::search::bron_kerbosch::BronKerbosch;
use bk_cliques::search::degeneracy::degeneracy;
use bk_cliques::util::{cliques_to_json, export_results, read_params};


/** enumerates the maximal and maximum cliques of a graph definition file. */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("bron_kerbosch.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args);

    // read the instance
    println!("reading instance: {}", params.inst_filename);
    let graph = match load_graph(&params.inst_filename) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("could not read {}: {}", params.inst_filename, e);
            process::exit(1);
        }
    };
    graph.display_statistics();
    println!("\t{} \t degeneracy", degeneracy(&graph));

    // enumerate the cliques
    let mut output = StandardOutput::new(!params.quiet);
    let mut engine = match BronKerbosch::new(&graph, params.use_degeneracy, params.use_pivot, &mut output) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("invalid graph: {}", e);
            process::exit(1);
        }
    };
    let t_start = Instant::now();
    if params.parallel {
        engine.run_parallel();
    } else {
        engine.run();
    }
    let duration = t_start.elapsed().as_secs_f32();
    let maximum_size = engine.maximum_cliques().first().map_or(0, |c| c.len());
    println!(
        "search took {:.3} seconds. Nb maximal cliques: {}, nb maximum cliques: {} (size {})",
        duration,
        engine.maximal_cliques().len(),
        engine.maximum_cliques().len(),
        maximum_size
    );

    // export results
    let solution = json!({
        "maximal_cliques": cliques_to_json(engine.maximal_cliques()),
        "maximum_cliques": cliques_to_json(engine.maximum_cliques()),
    });
    let stats = json!({
        "time_searched": duration,
        "inst_name": params.inst_filename,
        "use_degeneracy": params.use_degeneracy,
        "use_pivot": params.use_pivot,
        "nb_maximal": engine.maximal_cliques().len(),
        "nb_maximum": engine.maximum_cliques().len(),
        "maximum_size": maximum_size,
        "stats": engine.stats(),
    });
    if let Err(e) = export_results(&solution, &stats, params.perf_file.as_deref(), params.sol_file.as_deref()) {
        eprintln!("could not export results: {}", e);
        process::exit(1);
    }
}
