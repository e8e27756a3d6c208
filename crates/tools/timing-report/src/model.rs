//! Fixed vocabulary of the timing comparison: test cases, tools and metrics.
//!
//! All three are closed enumerations whose declaration order is significant.
//! Case order fixes the block layout of the input files and the order of every
//! report; tool order fixes the column order of every table.

use std::fmt;

// ---------------------------------------------------------------------------
// Case
// ---------------------------------------------------------------------------

/// A geometric test scenario cut by random planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Case {
    /// Triangular prism.
    Prism,
    /// Axis-aligned unit cube.
    UnitCube,
    /// Prism with triangulated faces.
    TriangulatedPrism,
    /// Hexahedron with triangulated faces.
    TriangulatedHexahedron,
    /// Prism with symmetric face decomposition.
    SymmetricPrism,
    /// Hexahedron with symmetric face decomposition.
    SymmetricHexahedron,
    /// Non-convex stellated dodecahedron.
    StellatedDodecahedron,
    /// Non-convex stellated icosahedron.
    StellatedIcosahedron,
}

impl Case {
    /// Every case, in input-file and report order.
    pub const ALL: [Case; 8] = [
        Case::Prism,
        Case::UnitCube,
        Case::TriangulatedPrism,
        Case::TriangulatedHexahedron,
        Case::SymmetricPrism,
        Case::SymmetricHexahedron,
        Case::StellatedDodecahedron,
        Case::StellatedIcosahedron,
    ];

    /// Cases listed in the multi-plane LaTeX table.
    pub const MULTI_PLANE: [Case; 3] = [
        Case::UnitCube,
        Case::TriangulatedHexahedron,
        Case::SymmetricHexahedron,
    ];

    /// Human-readable name, as printed in tables.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Case::Prism => "Prism",
            Case::UnitCube => "Unit Cube",
            Case::TriangulatedPrism => "Triangulated Prism",
            Case::TriangulatedHexahedron => "Triangulated Hexahedron",
            Case::SymmetricPrism => "Symmetric Prism",
            Case::SymmetricHexahedron => "Symmetric Hexahedron",
            Case::StellatedDodecahedron => "Stellated Dodecahedron",
            Case::StellatedIcosahedron => "Stellated Icosahedron",
        }
    }

    /// Name with spaces replaced by underscores, for use in file names.
    #[must_use]
    pub fn file_stem(self) -> String {
        self.name().replace(' ', "_")
    }

    /// Zero-based position of this case in [`Case::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tool
// ---------------------------------------------------------------------------

/// A benchmarked intersection implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tool {
    /// Interface Reconstruction Library. The normalization baseline.
    Irl,
    /// r3d.
    R3d,
    /// VOFTools.
    Voftools,
}

impl Tool {
    /// Every tool, in column order.
    pub const ALL: [Tool; 3] = [Tool::Irl, Tool::R3d, Tool::Voftools];

    /// The tool every ratio is normalized against.
    pub const BASELINE: Tool = Tool::Irl;

    /// Lowercase identifier (`irl`, `r3d`, `voftools`).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Tool::Irl => "irl",
            Tool::R3d => "r3d",
            Tool::Voftools => "voftools",
        }
    }

    /// Uppercase column label used in table headers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Tool::Irl => "IRL",
            Tool::R3d => "R3D",
            Tool::Voftools => "VOFTOOLS",
        }
    }

    /// Default timing file name written by the benchmark driver.
    #[must_use]
    pub fn default_file_name(self) -> String {
        format!("{}_timing.txt", self.id())
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

/// One timed phase of an intersection trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// Building the geometry.
    Initialization,
    /// Plane/geometry intersection.
    Intersection,
    /// Volume computation.
    Volume,
    /// Sum of the phases.
    Total,
}

impl Metric {
    /// Every metric, in column order of the input files and report order.
    pub const ALL: [Metric; 4] = [
        Metric::Initialization,
        Metric::Intersection,
        Metric::Volume,
        Metric::Total,
    ];

    /// Lowercase identifier, used in output file names.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Metric::Initialization => "initialization",
            Metric::Intersection => "intersection",
            Metric::Volume => "volume",
            Metric::Total => "total",
        }
    }

    /// Title line of the plain-text table for this metric.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Metric::Initialization => "Initialization Time Comparison",
            Metric::Intersection => "Intersection Time Comparison",
            Metric::Volume => "Volume Time Comparison",
            Metric::Total => "Total Time Comparison",
        }
    }

    /// Zero-based position of this metric in [`Metric::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_index_matches_declaration_order() {
        for (i, case) in Case::ALL.iter().enumerate() {
            assert_eq!(case.index(), i);
        }
    }

    #[test]
    fn file_stem_replaces_spaces() {
        assert_eq!(Case::TriangulatedPrism.file_stem(), "Triangulated_Prism");
        assert_eq!(Case::Prism.file_stem(), "Prism");
    }

    #[test]
    fn multi_plane_cases_exclude_prism() {
        assert!(!Case::MULTI_PLANE.contains(&Case::Prism));
        assert_eq!(Case::MULTI_PLANE.len(), 3);
    }

    #[test]
    fn tool_file_names() {
        assert_eq!(Tool::Irl.default_file_name(), "irl_timing.txt");
        assert_eq!(Tool::Voftools.default_file_name(), "voftools_timing.txt");
        assert_eq!(Tool::BASELINE, Tool::ALL[0]);
    }
}
