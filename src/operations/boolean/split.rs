use crate::error::{Result, TopologyError};
use crate::math::intersect_2d::segment_crossing;
use crate::topology::{Ring, VertexData, VertexId};

/// Finds every crossing between the original edges of `subject` and `clip`
/// and splices a linked pair of intersection vertices into the two rings.
///
/// Each new vertex is placed along its own edge by its own alpha, so several
/// crossings on one edge end up in parametric order. Returns the number of
/// crossings found.
///
/// # Errors
///
/// Returns an error if the ring links are inconsistent.
pub fn insert_intersections(subject: &mut Ring, clip: &mut Ring) -> Result<usize> {
    // Original edges are unaffected by the splicing below, so collect them once.
    let subject_edges: Vec<(VertexId, VertexId)> =
        subject.original_edges().collect::<std::result::Result<_, _>>()?;
    let clip_edges: Vec<(VertexId, VertexId)> =
        clip.original_edges().collect::<std::result::Result<_, _>>()?;

    let mut found = 0;
    for &(s_start, s_end) in &subject_edges {
        for &(c_start, c_end) in &clip_edges {
            let Some(crossing) = segment_crossing(
                &subject[s_start].point,
                &subject[s_end].point,
                &clip[c_start].point,
                &clip[c_end].point,
            ) else {
                continue;
            };

            let in_subject = subject.insert_between(
                VertexData::intersection(crossing.point, crossing.alpha_subject),
                s_start,
                s_end,
            )?;
            let in_clip = clip.insert_between(
                VertexData::intersection(crossing.point, crossing.alpha_clip),
                c_start,
                c_end,
            )?;
            link_neighbours(subject, in_subject, clip, in_clip)?;

            tracing::trace!(
                x = crossing.point.x,
                y = crossing.point.y,
                alpha_subject = crossing.alpha_subject,
                alpha_clip = crossing.alpha_clip,
                "crossing"
            );
            found += 1;
        }
    }

    Ok(found)
}

fn link_neighbours(
    subject: &mut Ring,
    in_subject: VertexId,
    clip: &mut Ring,
    in_clip: VertexId,
) -> std::result::Result<(), TopologyError> {
    subject.vertex_mut(in_subject)?.neighbour = Some(in_clip);
    clip.vertex_mut(in_clip)?.neighbour = Some(in_subject);
    Ok(())
}
