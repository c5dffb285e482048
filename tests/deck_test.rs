//! Tests for deck generation: pairing and shuffle uniformity.

use pairup::{CardFace, deal};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::{HashMap, HashSet};

#[test]
fn test_exactly_two_of_each_identity() {
    let mut rng = SmallRng::seed_from_u64(1);
    let cards = deal(8, &mut rng).expect("deal failed");
    assert_eq!(cards.len(), 16);

    let mut counts: HashMap<CardFace, usize> = HashMap::new();
    for card in &cards {
        *counts.entry(*card.face()).or_default() += 1;
    }
    assert_eq!(counts.len(), 8, "identities must be distinct");
    assert!(counts.values().all(|&n| n == 2));
}

#[test]
fn test_arrangement_varies_between_deals() {
    // With 4 pairs there are far more than 100 arrangements; seeing a
    // single ordering across 100 deals would mean the shuffle is broken.
    let mut orderings: HashSet<Vec<CardFace>> = HashSet::new();
    for seed in 0..100 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let cards = deal(4, &mut rng).expect("deal failed");
        orderings.insert(cards.iter().map(|c| *c.face()).collect());
    }
    assert!(orderings.len() > 50, "only {} distinct orderings", orderings.len());
}

#[test]
fn test_no_fixed_position_bias() {
    // The face at slot 0 should vary across deals; a biased shuffle that
    // pins some identity to the first slot would show up here.
    let mut first_slot: HashSet<CardFace> = HashSet::new();
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let cards = deal(6, &mut rng).expect("deal failed");
        first_slot.insert(*cards[0].face());
    }
    assert!(first_slot.len() > 5, "slot 0 saw only {} faces", first_slot.len());
}

#[test]
fn test_identity_pool_bound() {
    let mut rng = SmallRng::seed_from_u64(2);
    assert!(deal(48, &mut rng).is_ok());
    assert!(deal(49, &mut rng).is_err());
}
