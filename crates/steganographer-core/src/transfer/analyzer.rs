use std::fmt::{self, Display, Formatter};

use log::debug;

use super::{SegmentCounter, Segmented};
use crate::media::{HostImage, BIT_PLANES, CHANNELS};
use crate::Result;

/// bit-planes 0..=6 are analyzed, the most significant plane is not
pub const ANALYZED_BIT_PLANES: usize = 7;

/// one segment per analyzed bit-plane and color lane
pub const ANALYSIS_SEGMENTS: usize = ANALYZED_BIT_PLANES * CHANNELS;

/// Number of 4-connected regions of equal bits, per color lane and bit-plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisTable {
    counts: [[usize; BIT_PLANES]; CHANNELS],
}

impl AnalysisTable {
    pub fn from_counts(counts: [[usize; BIT_PLANES]; CHANNELS]) -> Self {
        Self { counts }
    }

    pub fn get(&self, lane: usize, plane: usize) -> usize {
        self.counts[lane][plane]
    }

    pub fn set(&mut self, lane: usize, plane: usize, regions: usize) {
        self.counts[lane][plane] = regions;
    }

    /// regions of all lanes summed up per analyzed bit-plane
    pub fn plane_totals(&self) -> [usize; ANALYZED_BIT_PLANES] {
        let mut totals = [0; ANALYZED_BIT_PLANES];
        for (plane, total) in totals.iter_mut().enumerate() {
            *total = self.counts.iter().map(|lane| lane[plane]).sum();
        }

        totals
    }

    /// Natural images fragment smoothly from plane to plane: the ratio of
    /// region counts of neighbouring planes changes slowly and steadily.
    /// A jump, a stall or a reversal in that change hints at embedded data.
    pub fn verdict(&self) -> Verdict {
        let totals = self.plane_totals();
        let ratios: Vec<f64> = totals
            .windows(2)
            .map(|w| w[1] as f64 / w[0] as f64)
            .collect();
        let suspicious = ratios
            .windows(2)
            .map(|w| w[0] - w[1])
            .any(|diff| diff < -0.01 || diff > 0.2 || diff.abs() < 0.001);
        debug!("plane totals {totals:?}, ratios {ratios:?}");

        if suspicious {
            Verdict::LikelyContainsHiddenData
        } else {
            Verdict::LikelyClean
        }
    }
}

/// Outcome of a steganalysis, a statistical guess and never a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    LikelyContainsHiddenData,
    LikelyClean,
}

impl Verdict {
    pub fn is_suspicious(&self) -> bool {
        matches!(self, Verdict::LikelyContainsHiddenData)
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::LikelyContainsHiddenData => {
                write!(f, "This image most likely DOES contain hidden data.")
            }
            Verdict::LikelyClean => write!(f, "This image most likely does NOT contain hidden data."),
        }
    }
}

/// Estimates whether an image carries hidden data, without any password.
///
/// Segment `s` analyzes bit-plane `s / 3` of color lane `s % 3` over the
/// whole image.
#[derive(Debug, Clone)]
pub struct Analyzer {
    image: HostImage,
    table: AnalysisTable,
    counter: SegmentCounter,
}

impl Analyzer {
    pub fn new(image: HostImage) -> Self {
        Self {
            image,
            table: AnalysisTable::default(),
            counter: SegmentCounter::new(ANALYSIS_SEGMENTS),
        }
    }

    pub fn table(&self) -> &AnalysisTable {
        &self.table
    }

    /// `None` until all segments have been processed
    pub fn verdict(&self) -> Option<Verdict> {
        if self.has_next() {
            return None;
        }

        Some(self.table.verdict())
    }
}

impl Segmented for Analyzer {
    fn counter(&self) -> &SegmentCounter {
        &self.counter
    }

    fn process_next_segment(&mut self) -> Result<()> {
        let segment = self.counter.next_index()?;
        let (plane, lane) = (segment / CHANNELS, segment % CHANNELS);
        let regions = count_regions(&self.image, lane as u8, plane as u8);
        self.table.set(lane, plane, regions);
        self.counter.mark_completed();

        Ok(())
    }
}

/// counts 4-connected regions of equal bits with an iterative flood fill
fn count_regions(image: &HostImage, lane: u8, plane: u8) -> usize {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let mut bits = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            bits.push(image.bit(x as u32, y as u32, lane, plane));
        }
    }

    let mut visited = vec![false; bits.len()];
    let mut stack = Vec::new();
    let mut regions = 0;
    for start in 0..bits.len() {
        if visited[start] {
            continue;
        }
        regions += 1;
        let value = bits[start];
        stack.push(start);
        while let Some(i) = stack.pop() {
            if visited[i] || bits[i] != value {
                continue;
            }
            visited[i] = true;
            let (x, y) = (i % width, i / width);
            if x > 0 {
                stack.push(i - 1);
            }
            if x + 1 < width {
                stack.push(i + 1);
            }
            if y > 0 {
                stack.push(i - width);
            }
            if y + 1 < height {
                stack.push(i + width);
            }
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{prepare_gradient_image, prepare_uniform_image};
    use image::{ImageBuffer, Rgba};

    fn analyze(image: HostImage) -> Result<Analyzer> {
        let mut analyzer = Analyzer::new(image);
        while analyzer.has_next() {
            analyzer.process_next_segment()?;
        }

        Ok(analyzer)
    }

    fn analyzed_rows(table: &AnalysisTable) -> Vec<Vec<usize>> {
        (0..CHANNELS)
            .map(|lane| (0..ANALYZED_BIT_PLANES).map(|p| table.get(lane, p)).collect())
            .collect()
    }

    #[test]
    fn should_count_regions_of_a_patterned_image() -> Result<()> {
        let image = ImageBuffer::from_fn(16, 16, |x, y| {
            Rgba([
                (x * x + y) as u8,
                (x * y) as u8,
                (x + 3 * y) as u8,
                255,
            ])
        });
        let analyzer = analyze(HostImage::from_image(image))?;

        assert_eq!(
            analyzed_rows(analyzer.table()),
            vec![
                vec![256, 16, 16, 8, 4, 2, 1],
                vec![65, 50, 54, 51, 44, 8, 4],
                vec![256, 16, 12, 10, 9, 8, 4],
            ]
        );
        assert_eq!(analyzer.verdict(), Some(Verdict::LikelyContainsHiddenData));

        Ok(())
    }

    #[test]
    fn should_count_regions_of_a_gradient() -> Result<()> {
        let analyzer = analyze(HostImage::from_image(prepare_gradient_image(16, 16)))?;

        assert_eq!(
            analyzed_rows(analyzer.table()),
            vec![
                vec![1, 1, 1, 256, 16, 8, 4],
                vec![1, 1, 1, 1, 16, 8, 4],
                vec![1, 1, 1, 1, 16, 8, 4],
            ]
        );
        assert!(analyzer.verdict().unwrap().is_suspicious());

        Ok(())
    }

    #[test]
    fn should_leave_the_top_plane_unanalyzed() -> Result<()> {
        let analyzer = analyze(HostImage::from_image(prepare_uniform_image(
            8,
            8,
            [255, 255, 255, 255],
        )))?;
        for lane in 0..CHANNELS {
            assert_eq!(analyzer.table().get(lane, 7), 0);
            assert_eq!(analyzer.table().get(lane, 0), 1);
        }

        Ok(())
    }

    #[test]
    fn should_withhold_the_verdict_until_complete() -> Result<()> {
        let mut analyzer = Analyzer::new(HostImage::from_image(prepare_gradient_image(4, 4)));
        assert_eq!(analyzer.total_segments(), 21);
        for _ in 0..20 {
            analyzer.process_next_segment()?;
            assert_eq!(analyzer.verdict(), None);
        }
        analyzer.process_next_segment()?;
        assert!(analyzer.verdict().is_some());

        Ok(())
    }

    #[test]
    fn should_judge_a_steady_decline_as_clean() {
        let mut counts = [[0; BIT_PLANES]; CHANNELS];
        counts[0][..ANALYZED_BIT_PLANES]
            .copy_from_slice(&[10_000, 9_000, 7_650, 6_120, 4_590, 3_213, 2_088]);
        let table = AnalysisTable::from_counts(counts);

        assert_eq!(table.verdict(), Verdict::LikelyClean);
        assert_eq!(
            table.verdict().to_string(),
            "This image most likely does NOT contain hidden data."
        );
    }

    #[test]
    fn should_judge_a_stalled_ratio_as_suspicious() {
        // every ratio is 1, so every difference is 0
        let table = AnalysisTable::from_counts([[5; BIT_PLANES]; CHANNELS]);
        assert_eq!(table.verdict(), Verdict::LikelyContainsHiddenData);
    }

    #[test]
    fn should_give_the_same_result_twice() -> Result<()> {
        let image = HostImage::from_image(prepare_gradient_image(12, 9));
        let first = analyze(image.clone())?;
        let second = analyze(image)?;
        assert_eq!(first.table(), second.table());
        assert_eq!(first.verdict(), second.verdict());

        Ok(())
    }
}
