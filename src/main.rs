use dynflow::max_flow::mocks::mock_cross_network;
use dynflow::max_flow::utils::dot_string;
use dynflow::max_flow::IncrementalMaxFlow;
use petgraph::graph::NodeIndex;

fn main() {
    env_logger::init();

    let (mut graph, edges) = mock_cross_network();
    let (s, t) = (NodeIndex::new(0), NodeIndex::new(3));
    println!("{}", dot_string(&graph));

    let mut engine = IncrementalMaxFlow::new();
    println!("max flow = {}", engine.max_flow(&graph, s, t));

    graph.disable_edge(edges[3]);
    println!(
        "after disabling e3: max flow = {}",
        engine.max_flow(&graph, s, t)
    );

    graph.enable_edge(edges[3]);
    let (value, cut) = engine.min_cut(&graph, s, t);
    println!("restored: max flow = {}, min cut = {:?}", value, cut);
    println!("stats: {:?}", engine.stats());
}
