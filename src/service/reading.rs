use crate::db::{Combination, Draw, ReadingStore};
use crate::error::TarotError;
use crate::service::picker::{ReadingPicker, choose};
use tracing::debug;

/// Look up every combination for `draw` and return one of them at random.
///
/// `Ok(None)` means the draw is valid but nothing is stored for it.
pub async fn draw_reading<S: ReadingStore>(
    store: &S,
    picker: &dyn ReadingPicker,
    draw: Draw,
) -> Result<Option<Combination>, TarotError> {
    let matches = store.find_combinations(draw).await?;
    debug!(
        c1id = draw.first,
        c2id = draw.second,
        c3id = draw.third,
        matches = matches.len(),
        "combination lookup"
    );
    Ok(choose(picker, matches))
}
