//! Maplist generation: shuffled stages, each given the next mode of a rotating cycle.

use crate::models::{MapCatalog, MapEntry, Mode};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a maplist from the catalog using the thread-local RNG.
pub fn generate_maplist(catalog: &MapCatalog) -> Vec<MapEntry> {
    generate_maplist_with_rng(catalog, &mut rand::thread_rng())
}

/// Generate a maplist: one entry per catalog stage, in shuffled order.
///
/// Modes are shuffled too, then handed out by `assign_modes`, so consecutive
/// maps never share a mode until the whole mode list has been used.
pub fn generate_maplist_with_rng<R: Rng + ?Sized>(catalog: &MapCatalog, rng: &mut R) -> Vec<MapEntry> {
    let mut modes = catalog.modes().to_vec();
    modes.shuffle(rng);
    let mut stages = catalog.stages().to_vec();
    stages.shuffle(rng);
    assign_modes(&stages, &modes)
}

/// Pair each stage with a mode: take the last mode of the working list, then move it
/// to the front.
///
/// The modes come out in reverse list order and repeat with period `modes.len()`:
/// `[TC, RM, SZ, CB]` yields `CB, SZ, RM, TC, CB, ...`. Returns nothing if `modes` is empty.
pub fn assign_modes(stages: &[String], modes: &[Mode]) -> Vec<MapEntry> {
    if modes.is_empty() {
        return Vec::new();
    }
    let mut rotation = modes.to_vec();
    stages
        .iter()
        .map(|stage| {
            rotation.rotate_right(1);
            MapEntry {
                stage: stage.clone(),
                mode: rotation[0],
            }
        })
        .collect()
}

/// Split a maplist into `rounds` consecutive slices of equal length (last one shorter if uneven).
pub fn split_maplist(maplist: &[MapEntry], rounds: usize) -> Vec<Vec<MapEntry>> {
    if rounds == 0 || maplist.is_empty() {
        return Vec::new();
    }
    let per_round = maplist.len().div_ceil(rounds);
    maplist.chunks(per_round).map(<[MapEntry]>::to_vec).collect()
}
