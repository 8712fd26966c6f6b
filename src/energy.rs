//! Fitness evaluation over the topology graph.
//!
//! The score of an individual is the summed pairwise alignment score over
//! every edge whose both endpoints have a fragment selected, minus one unit
//! per selected fragment. The penalty biases the search toward fewer but
//! more compatible fragments instead of maximal coverage.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::error::GaError;
use crate::population::{is_active, Individual, Population};
use crate::types::{AlignmentScorer, FragmentLibrary, Problem, Residue};

/// Number of positions whose allele selects a concrete fragment.
pub fn active_count<L, S>(
    problem: &Problem<'_, L, S>,
    individual: &Individual,
) -> Result<usize, GaError>
where
    L: FragmentLibrary + ?Sized,
    S: AlignmentScorer + ?Sized,
{
    check_width(problem, individual)?;
    let mut active = 0;
    for (column, &allele) in individual.iter().enumerate() {
        if is_active(allele, problem.count_at(column)?) {
            active += 1;
        }
    }
    Ok(active)
}

/// Scores one individual.
///
/// Performs no caching: repeated calls on the same individual recompute
/// from scratch. Callers needing throughput should batch via
/// [`evaluate_population`].
///
/// Defined edge cases: an edge with no aligned offsets contributes zero, a
/// fully null individual scores exactly `0`, and an edge-less topology
/// leaves only the `-active_count` term.
pub fn energy<L, S>(problem: &Problem<'_, L, S>, individual: &Individual) -> Result<f64, GaError>
where
    L: FragmentLibrary + ?Sized,
    S: AlignmentScorer + ?Sized,
{
    check_width(problem, individual)?;

    // Per-call mapping from key to allele and, for active keys, to the
    // selected fragment's residues. Pure data transformation, rebuilt on
    // every call rather than cached.
    let mut alleles: HashMap<&str, usize> = HashMap::with_capacity(problem.width());
    let mut sequences: HashMap<&str, &[Residue]> = HashMap::new();
    let mut active = 0usize;
    for (column, &allele) in individual.iter().enumerate() {
        let key = problem.keys[column].as_str();
        alleles.insert(key, allele);
        if is_active(allele, problem.count_at(column)?) {
            sequences.insert(key, problem.library.select(key, allele)?);
            active += 1;
        }
    }

    let mut score = 0.0;
    for edge in problem.topology.edges() {
        for key in [&edge.u, &edge.v] {
            if !alleles.contains_key(key.as_str()) {
                return Err(GaError::InvalidConfiguration(format!(
                    "edge references unknown key `{key}`"
                )));
            }
        }
        // Only edges with both endpoints active are scored.
        let (Some(&u_seq), Some(&v_seq)) =
            (sequences.get(edge.u.as_str()), sequences.get(edge.v.as_str()))
        else {
            continue;
        };
        for &(u_off, v_off) in &edge.same_aa {
            let u_aa = residue_at(u_seq, &edge.u, u_off)?;
            let v_aa = residue_at(v_seq, &edge.v, v_off)?;
            score += problem.scorer.score(u_aa, v_aa);
        }
    }

    Ok(score - active as f64)
}

/// Fitness of every individual, in input order.
///
/// With `parallel`, the pass fans out over rayon workers; each index still
/// maps to exactly one value regardless of completion order. Evaluation
/// draws no randomness, so parallel and sequential passes agree exactly.
pub fn evaluate_population<L, S>(
    problem: &Problem<'_, L, S>,
    population: &Population,
    parallel: bool,
) -> Result<Vec<f64>, GaError>
where
    L: FragmentLibrary + ?Sized,
    S: AlignmentScorer + ?Sized,
{
    if parallel {
        population
            .par_iter()
            .map(|individual| energy(problem, individual))
            .collect()
    } else {
        population
            .iter()
            .map(|individual| energy(problem, individual))
            .collect()
    }
}

fn residue_at(seq: &[Residue], key: &str, offset: usize) -> Result<Residue, GaError> {
    seq.get(offset).copied().ok_or_else(|| GaError::OutOfRange {
        key: key.to_string(),
        index: offset,
        limit: seq.len(),
    })
}

fn check_width<L, S>(problem: &Problem<'_, L, S>, individual: &Individual) -> Result<(), GaError>
where
    L: FragmentLibrary + ?Sized,
    S: AlignmentScorer + ?Sized,
{
    if individual.len() != problem.width() {
        return Err(GaError::InvalidConfiguration(format!(
            "individual has {} alleles for {} keys",
            individual.len(),
            problem.width()
        )));
    }
    Ok(())
}
