use anyhow::{Context, Result};
use lptrace::{Problem, Solution};
use std::fs;
use std::path::Path;

/// Parse a problem document from contract-shaped JSON.
pub fn parse_problem(raw: &str) -> Result<Problem> {
    serde_json::from_str(raw).context("parsing problem JSON")
}

/// Read a problem document from a JSON file.
pub fn read_problem(path: &Path) -> Result<Problem> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_problem(&raw)
}

/// Render a solution as pretty contract-shaped JSON.
pub fn render_solution(solution: &Solution) -> Result<String> {
    Ok(serde_json::to_string_pretty(solution)?)
}

/// Write a solution document, creating parent directories as needed.
pub fn write_solution(path: &Path, solution: &Solution) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, render_solution(solution)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lptrace::{solve, Constraint, Objective};
    use tempfile::tempdir;

    fn sample_problem() -> Problem {
        Problem {
            constraints: vec![
                Constraint::new(1.0, 1.0, 5.0),
                Constraint::new(-1.0, 2.0, 5.0),
                Constraint::new(-1.0, 0.0, 0.0),
                Constraint::new(0.0, -1.0, 0.0),
            ],
            objective: Some(Objective {
                a: 1.0,
                b: 1.0,
                maximize: true,
            }),
        }
    }

    #[test]
    fn problem_parses_from_contract_json() {
        let raw = r#"{
            "constraints": [{"a": 1.0, "b": 1.0, "c": 5.0}],
            "objective": {"a": 1.0, "b": 1.0, "maximize": true}
        }"#;
        let problem = parse_problem(raw).unwrap();
        assert_eq!(problem.constraints.len(), 1);
        assert!(problem.objective.unwrap().maximize);
    }

    #[test]
    fn objective_is_optional_in_the_contract() {
        let raw = r#"{"constraints": []}"#;
        let problem = parse_problem(raw).unwrap();
        assert!(problem.constraints.is_empty());
        assert!(problem.objective.is_none());
    }

    #[test]
    fn write_solution_creates_parent_dirs_and_round_trips() {
        let dir = tempdir().unwrap();
        let solution = solve(&sample_problem()).unwrap();
        let path = dir.path().join("out/solution.json");
        write_solution(&path, &solution).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["status"], "Optimal");
        assert!((parsed["optimalValue"].as_f64().unwrap() - 5.0).abs() < 1e-9);
    }
}
