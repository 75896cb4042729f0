//! Shader units and the ordered list the driver walks.

use std::collections::HashSet;
use std::fmt;

use crate::manifest::ManifestError;

/// Extension appended to every source name to form its artifact name.
pub const ARTIFACT_EXT: &str = "spv";

/// Pipeline stage inferred from a source file's extension.
///
/// Uses the same extension table as glslangValidator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    TessControl,
    TessEvaluation,
    Geometry,
    Fragment,
    Compute,
    Mesh,
    Task,
    RayGen,
    Intersection,
    AnyHit,
    ClosestHit,
    Miss,
    Callable,
}

impl ShaderStage {
    /// Classify a bare extension (no leading dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        let stage = match ext {
            "vert" => Self::Vertex,
            "tesc" => Self::TessControl,
            "tese" => Self::TessEvaluation,
            "geom" => Self::Geometry,
            "frag" => Self::Fragment,
            "comp" => Self::Compute,
            "mesh" => Self::Mesh,
            "task" => Self::Task,
            "rgen" => Self::RayGen,
            "rint" => Self::Intersection,
            "rahit" => Self::AnyHit,
            "rchit" => Self::ClosestHit,
            "rmiss" => Self::Miss,
            "rcall" => Self::Callable,
            _ => return None,
        };
        Some(stage)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::TessControl => "tess-control",
            Self::TessEvaluation => "tess-evaluation",
            Self::Geometry => "geometry",
            Self::Fragment => "fragment",
            Self::Compute => "compute",
            Self::Mesh => "mesh",
            Self::Task => "task",
            Self::RayGen => "ray-gen",
            Self::Intersection => "intersection",
            Self::AnyHit => "any-hit",
            Self::ClosestHit => "closest-hit",
            Self::Miss => "miss",
            Self::Callable => "callable",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One shader source file, named relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderUnit {
    name: String,
}

impl ShaderUnit {
    pub fn new(name: impl Into<String>) -> Result<Self, ManifestError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ManifestError::EmptyName);
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Output file name, always `<name>.spv`
    pub fn artifact_name(&self) -> String {
        format!("{}.{}", self.name, ARTIFACT_EXT)
    }

    /// Stage from the last extension, if it is one the compiler knows
    pub fn stage(&self) -> Option<ShaderStage> {
        let (_, ext) = self.name.rsplit_once('.')?;
        ShaderStage::from_extension(ext)
    }
}

impl fmt::Display for ShaderUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered, immutable list of units for one run.
///
/// Order only decides invocation order. Duplicates are kept and simply
/// compile twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderList {
    units: Vec<ShaderUnit>,
}

impl ShaderList {
    /// Build a list from source names, rejecting blank entries
    pub fn new<I, S>(names: I) -> Result<Self, ManifestError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let units = names
            .into_iter()
            .map(ShaderUnit::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { units })
    }

    pub fn units(&self) -> &[ShaderUnit] {
        &self.units
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShaderUnit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Names that appear more than once, in first-repeat order
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut dupes = Vec::new();
        for unit in &self.units {
            if !seen.insert(unit.name()) && reported.insert(unit.name()) {
                dupes.push(unit.name());
            }
        }
        dupes
    }
}

impl<'a> IntoIterator for &'a ShaderList {
    type Item = &'a ShaderUnit;
    type IntoIter = std::slice::Iter<'a, ShaderUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}
