use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::error::{ShaderError, Stage};

/// One validated shader stage.
#[derive(Debug, Clone)]
pub struct StageSource {
    pub path: PathBuf,
    pub source: String,
    pub entry_point: String,
    /// `@location`s consumed by the entry point.
    pub inputs: BTreeSet<u32>,
    /// `@location`s produced by the entry point.
    pub outputs: BTreeSet<u32>,
}

/// A vertex + fragment pair that parsed, validated and links.
///
/// Loading never touches the GPU: WGSL is checked with naga up front so a bad
/// shader file is reported before any window opens. Renderers build their
/// `wgpu::ShaderModule`s from the validated sources.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    pub vertex: StageSource,
    pub fragment: StageSource,
}

impl ShaderProgram {
    /// Reads, compiles and links the two shader files.
    pub fn load(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Result<Self, ShaderError> {
        let vertex_path = vertex_path.as_ref();
        let fragment_path = fragment_path.as_ref();

        let vs = read_source(Stage::Vertex, vertex_path)?;
        let fs = read_source(Stage::Fragment, fragment_path)?;

        let program = Self::from_sources(vertex_path, &vs, fragment_path, &fs)?;
        log::info!(
            "shader program ready: {} ({}) + {} ({})",
            vertex_path.display(),
            program.vertex.entry_point,
            fragment_path.display(),
            program.fragment.entry_point,
        );
        Ok(program)
    }

    /// Compiles and links already-loaded sources. `*_path` is used for diagnostics only.
    pub fn from_sources(
        vertex_path: &Path,
        vertex_src: &str,
        fragment_path: &Path,
        fragment_src: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = compile_stage(Stage::Vertex, vertex_path, vertex_src)?;
        let fragment = compile_stage(Stage::Fragment, fragment_path, fragment_src)?;

        let unmatched: Vec<u32> = fragment.inputs.difference(&vertex.outputs).copied().collect();
        if !unmatched.is_empty() {
            return Err(ShaderError::Link(format!(
                "fragment entry `{}` reads @location {:?} that vertex entry `{}` never writes",
                fragment.entry_point, unmatched, vertex.entry_point
            )));
        }

        Ok(Self { vertex, fragment })
    }

    /// Checks that every vertex input is fed by the caller's vertex buffer layout.
    pub fn require_vertex_inputs(&self, provided: &[u32]) -> Result<(), ShaderError> {
        let missing: Vec<u32> = self
            .vertex
            .inputs
            .iter()
            .filter(|loc| !provided.contains(loc))
            .copied()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ShaderError::Link(format!(
                "vertex entry `{}` expects @location {:?}, vertex buffers provide {:?}",
                self.vertex.entry_point, missing, provided
            )))
        }
    }

    /// Creates the GPU modules for both stages.
    pub fn create_modules(&self, device: &wgpu::Device) -> (wgpu::ShaderModule, wgpu::ShaderModule) {
        let vs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("clock vertex shader"),
            source: wgpu::ShaderSource::Wgsl(self.vertex.source.as_str().into()),
        });
        let fs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("clock fragment shader"),
            source: wgpu::ShaderSource::Wgsl(self.fragment.source.as_str().into()),
        });
        (vs, fs)
    }
}

fn read_source(stage: Stage, path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path).map_err(|source| ShaderError::Open {
        stage,
        path: path.to_path_buf(),
        source,
    })
}

fn compile_stage(stage: Stage, path: &Path, source: &str) -> Result<StageSource, ShaderError> {
    let compile_err = |diagnostic: String| ShaderError::Compile {
        stage,
        path: path.to_path_buf(),
        diagnostic,
    };

    let module = naga::front::wgsl::parse_str(source).map_err(|e| compile_err(e.emit_to_string(source)))?;

    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|e| compile_err(e.emit_to_string(source)))?;

    let wanted = match stage {
        Stage::Vertex => naga::ShaderStage::Vertex,
        Stage::Fragment => naga::ShaderStage::Fragment,
    };

    let Some(entry) = module.entry_points.iter().find(|ep| ep.stage == wanted) else {
        return Err(ShaderError::Link(format!(
            "{} has no @{stage} entry point",
            path.display()
        )));
    };

    let mut inputs = BTreeSet::new();
    for arg in &entry.function.arguments {
        collect_locations(&module, arg.ty, arg.binding.as_ref(), &mut inputs);
    }

    let mut outputs = BTreeSet::new();
    if let Some(result) = &entry.function.result {
        collect_locations(&module, result.ty, result.binding.as_ref(), &mut outputs);
    }

    Ok(StageSource {
        path: path.to_path_buf(),
        source: source.to_string(),
        entry_point: entry.name.clone(),
        inputs,
        outputs,
    })
}

/// Gathers user `@location`s of an entry-point argument or result, looking
/// through unbound structs.
fn collect_locations(
    module: &naga::Module,
    ty: naga::Handle<naga::Type>,
    binding: Option<&naga::Binding>,
    out: &mut BTreeSet<u32>,
) {
    match binding {
        Some(naga::Binding::Location { location, .. }) => {
            out.insert(*location);
        }
        Some(naga::Binding::BuiltIn(_)) => {}
        None => {
            if let naga::TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_locations(module, member.ty, member.binding.as_ref(), out);
                }
            }
        }
    }
}
