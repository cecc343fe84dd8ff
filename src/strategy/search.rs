//! Object lookup among the current snapshot

use glam::DVec2;

use super::state::{BodyFragment, ObjectKind, VisibleObject};
use crate::distance;

/// Find an object of `kind`.
///
/// Without a reference point the first match wins. With one, the strictly
/// nearest match wins and ties keep the earliest object.
pub fn find_object<'a>(
    objects: &'a [VisibleObject],
    kind: ObjectKind,
    from: Option<DVec2>,
) -> Option<&'a VisibleObject> {
    let mut matches = objects.iter().filter(|o| o.kind == kind);
    let Some(origin) = from else {
        return matches.next();
    };

    let mut best: Option<(&VisibleObject, f64)> = None;
    for object in matches {
        let d = distance(origin, object.pos);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((object, d));
        }
    }
    best.map(|(object, _)| object)
}

/// Smallest-mass fragment; ties keep the earliest one
pub fn representative_fragment(fragments: &[BodyFragment]) -> Option<&BodyFragment> {
    fragments.iter().fold(None, |best, f| match best {
        Some(b) if b.mass <= f.mass => Some(b),
        _ => Some(f),
    })
}
