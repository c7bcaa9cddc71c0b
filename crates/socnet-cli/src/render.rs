//! Terminal rendering for query results.

use colored::Colorize;
use socnet_graph::{
    CircleMember, GraphStats, NearbyPerson, PathResult, PersonInfo, PersonStats,
    ReachablePerson, Segmentation,
};

pub fn path(result: &PathResult) {
    println!("{}", result.path.join(" -> ").cyan());
    println!("Distance: {} hops", result.hops.to_string().cyan());
}

pub fn nearby(person: &str, radius: f64, people: &[NearbyPerson]) {
    println!("People near {} (radius={}):", person.cyan(), radius);
    if people.is_empty() {
        println!("  No one nearby.");
        return;
    }
    for p in people {
        println!("  {} {}", p.name, format!("(distance: {:.2})", p.distance).dimmed());
    }
}

pub fn reach(person: &str, max_hops: usize, people: &[ReachablePerson]) {
    println!(
        "People reachable from {} within {} hops:",
        person.cyan(),
        max_hops
    );
    if people.is_empty() {
        println!("  No one reachable.");
        return;
    }
    for p in people {
        println!("  {} {}", p.name, format!("({} hops)", p.hops).dimmed());
    }
}

fn band(title: &str, members: &[PersonStats]) {
    println!("{}", format!("=== {} ===", title).bold());
    for p in members {
        println!(
            "  {} {}",
            p.name,
            format!("(degree: {}, weight: {})", p.degree, p.weight_sum).dimmed()
        );
    }
}

pub fn segmentation(seg: &Segmentation) {
    band("Core People (top 20%)", &seg.core);
    band("Active People (middle 40%)", &seg.active);
    band("Edge People (bottom 40%)", &seg.edge);
}

pub fn circle(person: &str, members: &[CircleMember]) {
    println!(
        "{}'s social circle ({} connections):",
        person.cyan(),
        members.len()
    );
    for m in members {
        println!("  {} {}", m.name, format!("(weight: {})", m.weight).dimmed());
    }
}

pub fn info(info: &PersonInfo) {
    println!("{}", format!("=== {} ===", info.name).bold());
    println!("  Index: {}", info.index);
    println!("  Location: ({:.2}, {:.2})", info.loc.x, info.loc.y);
    println!("  Connections: {}", info.degree);
}

pub fn stats(stats: &GraphStats) {
    println!("Nodes: {}", stats.node_count.to_string().cyan());
    println!("Edges: {}", stats.edge_count.to_string().cyan());
}

/// Reports a query that produced no result. Not an error for the process.
pub fn query_failure(message: &str) {
    println!("{} {}", "!".yellow(), message);
}
