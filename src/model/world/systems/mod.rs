pub mod fauna;
pub mod flora;

use aura_data::Identity;

/// Handles of every entity carrying `C`, in ascending id order.
///
/// hecs iteration order follows archetype layout, so anything that feeds the
/// RNG has to start from this order to stay reproducible.
pub fn sorted_handles<C: hecs::Component>(ecs: &hecs::World) -> Vec<hecs::Entity> {
    let mut rows: Vec<_> = ecs
        .query::<(&Identity, &C)>()
        .iter()
        .map(|(handle, (identity, _))| (identity.id, handle))
        .collect();
    rows.sort_unstable_by_key(|(id, _)| *id);
    rows.into_iter().map(|(_, handle)| handle).collect()
}
