use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn route() -> Command {
    Command::cargo_bin("route").unwrap()
}

// Ring of (0,0) (3,0) (3,4) (0,4) plus an isolated node 4.
fn write_ring(dir: &TempDir) -> (String, String) {
    let nodes = dir.path().join("nodes.csv");
    let connections = dir.path().join("connections.csv");
    fs::write(&nodes, "x,y\n0,0\n3,0\n3,4\n0,4\n50,50\n").unwrap();
    fs::write(&connections, "from,to\n0,1\n1,2\n2,3\n3,0\n").unwrap();
    (
        nodes.to_string_lossy().into_owned(),
        connections.to_string_lossy().into_owned(),
    )
}

#[test]
fn campus_route_to_self() {
    route()
        .args(["-s", "0", "-d", "0", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: 0\n"))
        .stdout(predicate::str::contains("Estimated time to reach: 0 mins"));
}

#[test]
fn campus_route_between_neighbours() {
    route()
        .args(["--source", "0", "--destination", "1", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: 0 -> 1\n"));
}

#[test]
fn custom_map_uses_lowest_index_tie_break() {
    let dir = TempDir::new().unwrap();
    let (nodes, connections) = write_ring(&dir);
    route()
        .args(["-n", &nodes, "-c", &connections, "--raw-coordinates", "-s", "0", "-d", "2", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: 0 -> 1 -> 2\n"))
        .stdout(predicate::str::contains("Distance: 7.00"));
}

#[test]
fn unreachable_destination_fails() {
    let dir = TempDir::new().unwrap();
    let (nodes, connections) = write_ring(&dir);
    route()
        .args(["-n", &nodes, "-c", &connections, "--raw-coordinates", "-s", "0", "-d", "4", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route from 0 to 4"));
}

#[test]
fn out_of_range_index_fails() {
    route()
        .args(["-s", "0", "-d", "99", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("node index 99 is out of range"));
}

#[test]
fn route_written_as_csv() {
    let dir = TempDir::new().unwrap();
    let (nodes, connections) = write_ring(&dir);
    let out = dir.path().join("route.csv");
    route()
        .args(["-n", &nodes, "-c", &connections, "--raw-coordinates", "-s", "0", "-d", "2", "-q"])
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(
        written,
        "step,node,x,y,cumulative_distance\n\
         0,0,0.000000,0.000000,0.000000\n\
         1,1,3.000000,0.000000,3.000000\n\
         2,2,3.000000,4.000000,7.000000\n"
    );
}
