use lazy_sssp::algorithm::{SettleStep, StepRecorder};
use lazy_sssp::graph::{DirectedGraph, Graph, GraphBuilder};
use lazy_sssp::{CancellationToken, Dijkstra, Error, ShortestPathAlgorithm};
use std::collections::HashMap;

type SampleGraph = DirectedGraph<&'static str, u32>;

// Undirected sample graph: A-B:5, A-C:10, B-D:3, C-D:2, D-E:4
fn sample_graph() -> SampleGraph {
    let mut builder = GraphBuilder::new();
    builder
        .add_undirected_edge("A", "B", 5)
        .add_undirected_edge("A", "C", 10)
        .add_undirected_edge("B", "D", 3)
        .add_undirected_edge("C", "D", 2)
        .add_undirected_edge("D", "E", 4);
    builder.build().unwrap()
}

fn path_cost(graph: &SampleGraph, path: &[&'static str]) -> u32 {
    path.windows(2)
        .map(|pair| {
            graph
                .get_edge_weight(&pair[0], &pair[1])
                .expect("Path should only use existing edges")
        })
        .sum()
}

#[test]
fn test_sample_graph_distances() {
    let graph = sample_graph();
    let result = Dijkstra::new().run(&graph, "A").unwrap();

    let expected = HashMap::from([("A", 0), ("B", 5), ("C", 10), ("D", 8), ("E", 12)]);
    assert_eq!(result.distances, expected);
    assert_eq!(result.source, "A");
    assert!(!result.predecessors.contains_key("A"), "Source has no predecessor");
}

#[test]
fn test_sample_graph_paths() {
    let graph = sample_graph();
    let result = Dijkstra::new().run(&graph, "A").unwrap();

    let to_e = result.path_to(&"E").unwrap().unwrap();
    assert_eq!(to_e, vec!["A", "B", "D", "E"]);
    assert_eq!(path_cost(&graph, &to_e), 12);

    // A->C directly and A->B->D->C both cost 10; either predecessor is valid
    let to_c = result.path_to(&"C").unwrap().unwrap();
    assert!(to_c == vec!["A", "C"] || to_c == vec!["A", "B", "D", "C"]);
    assert_eq!(path_cost(&graph, &to_c), 10);
    assert_eq!(result.distance(&"C"), Some(10));
}

#[test]
fn test_single_vertex_graph() {
    let mut builder: GraphBuilder<&str, u32> = GraphBuilder::new();
    builder.add_vertex("S");
    let graph = builder.build().unwrap();

    let result = Dijkstra::new().run(&graph, "S").unwrap();
    assert_eq!(result.distances, HashMap::from([("S", 0)]));
    assert!(result.predecessors.is_empty());
    assert_eq!(result.path_to(&"S").unwrap(), Some(vec!["S"]));
}

#[test]
fn test_source_missing_from_graph() {
    let graph = sample_graph();
    let result = Dijkstra::new().run(&graph, "Q").unwrap();

    assert_eq!(result.distances, HashMap::from([("Q", 0)]));
    assert!(result.predecessors.is_empty());
    assert_eq!(result.path_to(&"Q").unwrap(), Some(vec!["Q"]));
    assert_eq!(result.path_to(&"A").unwrap(), None);
}

#[test]
fn test_disconnected_vertex() {
    let mut builder = GraphBuilder::new();
    builder
        .add_undirected_edge("A", "B", 5u32)
        .add_undirected_edge("B", "D", 3)
        .add_vertex("D2");
    let graph = builder.build().unwrap();

    let result = Dijkstra::new().run(&graph, "A").unwrap();
    assert!(!result.is_reachable(&"D2"));
    assert_eq!(result.distance(&"D2"), None);
    assert_eq!(result.path_to(&"D2").unwrap(), None);
    assert_eq!(result.reachable_count(), 3);
}

#[test]
fn test_edges_are_directed() {
    let mut builder = GraphBuilder::new();
    builder.add_edge("A", "B", 1u32);
    let graph = builder.build().unwrap();

    let from_b = Dijkstra::new().run(&graph, "B").unwrap();
    assert!(!from_b.is_reachable(&"A"));

    let from_a = Dijkstra::new().run(&graph, "A").unwrap();
    assert_eq!(from_a.distance(&"B"), Some(1));
}

#[test]
fn test_zero_weight_cycle() {
    let mut builder = GraphBuilder::new();
    builder
        .add_edge("A", "B", 0u32)
        .add_edge("B", "A", 0)
        .add_edge("B", "C", 0);
    let graph = builder.build().unwrap();

    let result = Dijkstra::new().run(&graph, "A").unwrap();
    assert_eq!(result.distances, HashMap::from([("A", 0), ("B", 0), ("C", 0)]));
    assert!(!result.predecessors.contains_key("A"));
    assert_eq!(result.path_to(&"C").unwrap(), Some(vec!["A", "B", "C"]));
}

#[test]
fn test_stale_entries_are_discarded() {
    // B is first discovered at 10, then improved to 2 through C
    let mut builder = GraphBuilder::new();
    builder
        .add_edge("A", "B", 10u32)
        .add_edge("A", "C", 1)
        .add_edge("C", "B", 1);
    let graph = builder.build().unwrap();

    let result = Dijkstra::new().run(&graph, "A").unwrap();
    assert_eq!(result.distance(&"B"), Some(2));
    assert_eq!(result.predecessors.get("B"), Some(&"C"));
    assert_eq!(result.stats.settled, 3);
    assert_eq!(result.stats.relaxations, 3);
    assert_eq!(result.stats.stale_discarded, 1);
    assert_eq!(result.stats.max_frontier_len, 2);
}

#[test]
fn test_unknown_graph() {
    let graph: Option<&DirectedGraph<&str, u32>> = None;
    let result = Dijkstra::new().run_optional(graph, "A");
    assert_eq!(result.unwrap_err(), Error::UnknownGraph);

    let graph = sample_graph();
    let result = Dijkstra::new().run_optional(Some(&graph), "A").unwrap();
    assert_eq!(result.distance(&"E"), Some(12));
}

#[test]
fn test_observer_sees_every_settle_step() {
    let graph = sample_graph();
    let mut recorder = StepRecorder::new();
    let result = Dijkstra::new()
        .run_observed(&graph, "A", &mut recorder)
        .unwrap();

    let steps = recorder.steps();
    assert_eq!(steps.len(), 5);
    assert_eq!(recorder.settle_order(), vec![&"A", &"B", &"D", &"C", &"E"]);
    assert_eq!(
        steps.iter().map(|s| s.index).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );

    // After settling D its neighbour E already carries a tentative distance
    let third = &steps[2];
    assert_eq!(third.vertex, "D");
    assert_eq!(third.distance, 8);
    assert_eq!(third.distances.get("E"), Some(&12));
    assert!(!third.visited.contains("E"));
    assert_eq!(third.visited.len(), 3);

    let last = &steps[4];
    assert_eq!(last.distances.len(), result.distances.len());
    assert_eq!(last.visited.len(), 5);
}

#[test]
fn test_closure_observer() {
    let graph = sample_graph();
    let mut settled = Vec::new();
    let mut observer = |step: &SettleStep<'_, &'static str, u32>| {
        assert!(step.is_settled(step.vertex));
        assert_eq!(step.distance_to(step.vertex), Some(step.distance));
        settled.push((*step.vertex, step.distance));
    };

    Dijkstra::new()
        .run_observed(&graph, "A", &mut observer)
        .unwrap();

    assert_eq!(
        settled,
        vec![("A", 0), ("B", 5), ("D", 8), ("C", 10), ("E", 12)]
    );
}

#[test]
fn test_cancelled_before_start() {
    let graph = sample_graph();
    let token = CancellationToken::new();
    token.cancel();

    let result = Dijkstra::new().with_cancellation(token).run(&graph, "A");
    assert_eq!(result.unwrap_err(), Error::Cancelled { settled: 0 });
}

#[test]
fn test_cancelled_mid_run() {
    let graph = sample_graph();
    let token = CancellationToken::new();
    let engine = Dijkstra::new().with_cancellation(token.clone());

    let mut observer = |step: &SettleStep<'_, &'static str, u32>| {
        if step.index == 2 {
            token.cancel();
        }
    };

    let result = engine.run_observed(&graph, "A", &mut observer);
    assert_eq!(result.unwrap_err(), Error::Cancelled { settled: 2 });
}

#[test]
fn test_uncancelled_token_does_not_change_result() {
    let graph = sample_graph();
    let plain = Dijkstra::new().run(&graph, "A").unwrap();
    let with_token = Dijkstra::new()
        .with_cancellation(CancellationToken::new())
        .run(&graph, "A")
        .unwrap();

    assert_eq!(plain.distances, with_token.distances);
    assert_eq!(plain.stats, with_token.stats);
}

#[test]
fn test_run_each_matches_sequential_runs() {
    let graph = sample_graph();
    let engine = Dijkstra::new();
    let sources = ["A", "C", "E", "missing"];

    let batch = engine.run_each(&graph, &sources);
    assert_eq!(batch.len(), sources.len());

    for (source, outcome) in sources.iter().zip(batch) {
        let parallel = outcome.unwrap();
        let sequential = engine.run(&graph, *source).unwrap();
        assert_eq!(parallel.source, *source);
        assert_eq!(parallel.distances, sequential.distances);
    }
}

#[test]
fn test_trait_interface() {
    let graph = sample_graph();
    let dijkstra = Dijkstra::new();

    let name = <Dijkstra as ShortestPathAlgorithm<&str, u32, SampleGraph>>::name(&dijkstra);
    assert_eq!(name, "Dijkstra");

    let result = dijkstra.compute_shortest_paths(&graph, "A").unwrap();
    let path =
        <Dijkstra as ShortestPathAlgorithm<&str, u32, SampleGraph>>::get_path(&dijkstra, &result, &"E")
            .unwrap();
    assert_eq!(path, Some(vec!["A", "B", "D", "E"]));
}

#[test]
fn test_routes_cover_all_vertices() {
    let mut builder = GraphBuilder::new();
    builder
        .add_undirected_edge("A", "B", 5u32)
        .add_vertex("Z");
    let graph = builder.build().unwrap();

    let result = Dijkstra::new().run(&graph, "A").unwrap();
    let routes = result.routes(&graph).unwrap();

    let targets: Vec<_> = routes.iter().map(|r| r.target).collect();
    assert_eq!(targets, vec!["A", "B", "Z"]);
    assert_eq!(routes[0].path, Some(vec!["A"]));
    assert_eq!(routes[1].distance, Some(5));
    assert_eq!(routes[1].path, Some(vec!["A", "B"]));
    assert_eq!(routes[2].distance, None);
    assert_eq!(routes[2].path, None);
}

#[test]
fn test_result_serializes_to_json() {
    let graph = sample_graph();
    let result = Dijkstra::new().run(&graph, "A").unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["source"], "A");
    assert_eq!(json["distances"]["E"], 12);
    assert_eq!(json["predecessors"]["E"], "D");
    assert_eq!(json["stats"]["settled"], 5);
}

#[test]
fn test_into_tables() {
    let graph = sample_graph();
    let (distances, predecessors) = Dijkstra::new().run(&graph, "A").unwrap().into_tables();

    assert_eq!(distances.len(), 5);
    assert_eq!(predecessors.len(), 4);
    assert_eq!(predecessors.get("D"), Some(&"B"));
}

#[test]
fn test_near_max_weights_do_not_overflow() {
    let mut builder = GraphBuilder::new();
    builder
        .add_edge("A", "B", u32::MAX - 1)
        .add_edge("B", "C", 5u32);
    let graph = builder.build().unwrap();

    let result = Dijkstra::new().run(&graph, "A").unwrap();
    assert_eq!(result.distance(&"B"), Some(u32::MAX - 1));
    // A->B->C does not fit in u32, so C counts as unreached
    assert!(!result.is_reachable(&"C"));
    assert_eq!(result.path_to(&"C").unwrap(), None);
}

#[test]
fn test_overflowing_route_loses_to_representable_one() {
    let mut builder = GraphBuilder::new();
    builder
        .add_edge("A", "B", u32::MAX - 1)
        .add_edge("B", "C", 5u32)
        .add_edge("A", "C", 7);
    let graph = builder.build().unwrap();

    let result = Dijkstra::new().run(&graph, "A").unwrap();
    assert_eq!(result.distance(&"C"), Some(7));
    assert_eq!(result.path_to(&"C").unwrap(), Some(vec!["A", "C"]));
}

#[test]
fn test_exact_max_distance_is_reachable() {
    let mut builder = GraphBuilder::new();
    builder
        .add_edge("A", "B", u8::MAX - 5)
        .add_edge("B", "C", 5u8);
    let graph = builder.build().unwrap();

    let result = Dijkstra::new().run(&graph, "A").unwrap();
    assert_eq!(result.distance(&"C"), Some(u8::MAX));
}
