//! Demo graphs.

use std::f64::consts::PI;

use dotgraph_core::{
    Color, EdgeBuilder, EdgeRef, GraphBuilder, GraphKind, NodeBuilder, NodeRef, NodeShape, Point,
    gen_nodes,
};
use dotgraph_error::{Error, Result};

pub const PETERSEN_LABEL: &str = "Petersen Graph (3-Coloring)";

/// Place the `n`th vertex of a pentagon on a circle of `radius` inches.
fn pentagon_point(n: usize, radius: f32) -> Point {
    let degrees = ((n * 72) % 360) as f64;
    let radians = degrees * (PI / 180.0);
    Point::locked(
        radius * radians.cos() as f32,
        radius * radians.sin() as f32,
    )
}

/// The Petersen graph, 3-colored, with the outer ring and inner star pinned
/// in place.
pub fn petersen(kind: GraphKind) -> GraphBuilder {
    let mut graph = GraphBuilder::new(kind);
    graph.set_label(PETERSEN_LABEL);
    graph.set_node_template(Some(
        NodeBuilder::new()
            .with_label(" ")
            .with_color(Color::BLACK)
            .with_shape(NodeShape::CIRCLE)
            .with_style("filled")
            .into_ref(),
    ));

    let nodes = gen_nodes(10);
    let fills = [
        Color::RED,
        Color::CORNFLOWERBLUE,
        Color::CHARTREUSE,
        Color::RED,
        Color::CORNFLOWERBLUE,
        Color::CORNFLOWERBLUE,
        Color::RED,
        Color::RED,
        Color::CHARTREUSE,
        Color::CHARTREUSE,
    ];
    for (i, (node, fill)) in nodes.iter().zip(fills).enumerate() {
        // 0..5 outer ring, 5..10 inner star
        let (n, radius) = if i < 5 { (i, 2.0) } else { (i - 5, 1.0) };
        node.update(|b| {
            b.fill_color = Some(fill);
            b.position = Some(pentagon_point(n, radius));
        });
    }

    let wiring = [
        // outer ring
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 0),
        // spokes
        (0, 5),
        (1, 6),
        (2, 7),
        (3, 8),
        (4, 9),
        // inner star
        (5, 7),
        (7, 9),
        (9, 6),
        (6, 8),
        (8, 5),
    ];
    let edges: Vec<EdgeRef> = wiring
        .iter()
        .map(|&(src, dst)| EdgeRef::between(&nodes[src], &nodes[dst]))
        .collect();

    graph.add_nodes(&nodes);
    graph.add_edges(&edges);
    graph
}

/// `count` nodes in a ring: node `i + 1` points at node `i`, node 0 closes
/// the ring by pointing at the last one. Every edge carries `label`.
pub fn cycle(kind: GraphKind, count: usize, label: &str) -> Result<GraphBuilder> {
    if count == 0 {
        return Err(Error::invalid_argument("cycle needs at least one node")
            .with_operation("demo::cycle")
            .with_context("count", count.to_string()));
    }

    let nodes: Vec<_> = (0..count)
        .map(|i| NodeRef::labeled(format!("node{i}")))
        .collect();
    let edges: Vec<_> = (0..count)
        .map(|i| {
            EdgeBuilder::between(&nodes[(i + 1) % count], &nodes[i])
                .with_label(label)
                .into_ref()
        })
        .collect();

    let mut graph = GraphBuilder::new(kind);
    graph.add_nodes(&nodes);
    graph.add_edges(&edges);
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotgraph_dot::render_document;
    use dotgraph_error::ErrorKind;

    #[test]
    fn petersen_shape() {
        let graph = petersen(GraphKind::Undirected);
        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), 15);
        assert_eq!(graph.label(), Some(PETERSEN_LABEL));

        let doc = graph.build();
        assert_eq!(doc.edges().len(), 15);
        assert_eq!(doc.node_template().map(|t| t.len()), Some(4));
        assert!(doc.nodes().iter().all(|n| n.attributes().len() == 2));
    }

    #[test]
    fn petersen_output_prefix() {
        let text = render_document(&petersen(GraphKind::Undirected).build());
        let expected_head = concat!(
            "graph {\n",
            "\n",
            "\tlabel=\"Petersen Graph (3-Coloring)\"\n",
            "\n",
            "\tnode [\n",
            "\t\tcolor=\"black\"\n",
            "\t\tlabel=\" \"\n",
            "\t\tshape=\"circle\"\n",
            "\t\tstyle=\"filled\"\n",
            "\t]\n",
            "\n",
            "\t0 [fillcolor=\"red\", pos=\"2.000000,0.000000!\"];\n",
        );
        assert!(text.starts_with(expected_head), "{text}");
        assert!(text.contains("\t5 [fillcolor=\"cornflowerblue\", pos=\"1.000000,0.000000!\"];\n"));
        assert!(text.contains("\n\n\t0 -- 1;\n"));
        assert!(text.ends_with("\t8 -- 5;\n}\n"));
    }

    #[test]
    fn pentagon_points_are_locked() {
        let p = pentagon_point(0, 2.0);
        assert_eq!((p.x, p.y, p.lock), (2.0, 0.0, true));
        let q = pentagon_point(5, 1.0);
        assert!((q.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cycle_wiring() {
        let doc = cycle(GraphKind::Directed, 3, "a").expect("cycle").build();
        let pairs: Vec<_> = doc.edges().iter().map(|e| (e.src(), e.dst())).collect();
        assert_eq!(pairs, vec![(1, 0), (2, 1), (0, 2)]);
    }

    #[test]
    fn single_node_cycle_is_a_self_loop() {
        let doc = cycle(GraphKind::Undirected, 1, "self").expect("cycle").build();
        assert_eq!(doc.nodes().len(), 1);
        assert_eq!((doc.edges()[0].src(), doc.edges()[0].dst()), (0, 0));
    }

    #[test]
    fn empty_cycle_is_rejected() {
        let err = cycle(GraphKind::Directed, 0, "a").expect_err("zero nodes");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.operation(), "demo::cycle");
    }
}
