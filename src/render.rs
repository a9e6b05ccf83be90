//! Render configuration, eye textures and distortion meshes.
//!
//! The C API passes backend-specific data in unions with a generic struct
//! ending in eight pointer-sized slots (`PlatformData`). [`GlConfig`] and
//! [`GlTexture`] pack the OpenGL variants into the generic [`RenderApiConfig`]
//! and [`Texture`].

use crate::library::Functions;
use crate::sys;
use crate::types::{RenderApi, Recti, Sizei, Vector2f};

/// Header shared by all render API configurations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderApiConfigHeader {
    pub api: RenderApi,
    /// Size of the back buffer the SDK renders distortion into.
    pub rt_size: Sizei,
    pub multisample: i32,
}

impl From<RenderApiConfigHeader> for sys::ovrRenderAPIConfigHeader {
    fn from(h: RenderApiConfigHeader) -> Self {
        Self {
            API: h.api.to_raw(),
            RTSize: h.rt_size.into(),
            Multisample: h.multisample,
        }
    }
}

impl From<sys::ovrRenderAPIConfigHeader> for RenderApiConfigHeader {
    fn from(h: sys::ovrRenderAPIConfigHeader) -> Self {
        Self {
            api: RenderApi::from_raw(h.API),
            rt_size: h.RTSize.into(),
            multisample: h.Multisample,
        }
    }
}

/// Backend-agnostic render API configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderApiConfig {
    pub header: RenderApiConfigHeader,
    pub platform_data: [usize; 8],
}

impl From<&RenderApiConfig> for sys::ovrRenderAPIConfig {
    fn from(c: &RenderApiConfig) -> Self {
        Self {
            Header: c.header.into(),
            PlatformData: c.platform_data,
        }
    }
}

/// OpenGL render configuration.
///
/// On Windows the SDK also needs the window and device context it renders
/// into; other platforms use the current GL context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlConfig {
    pub header: RenderApiConfigHeader,
    /// `HWND` of the output window.
    #[cfg(windows)]
    pub window: *mut std::ffi::c_void,
    /// `HDC` of the output window.
    #[cfg(windows)]
    pub dc: *mut std::ffi::c_void,
}

impl GlConfig {
    #[cfg(not(windows))]
    pub fn new(rt_size: Sizei, multisample: i32) -> Self {
        Self {
            header: RenderApiConfigHeader {
                api: RenderApi::OpenGl,
                rt_size,
                multisample,
            },
        }
    }

    #[cfg(windows)]
    pub fn new(
        rt_size: Sizei,
        multisample: i32,
        window: *mut std::ffi::c_void,
        dc: *mut std::ffi::c_void,
    ) -> Self {
        Self {
            header: RenderApiConfigHeader {
                api: RenderApi::OpenGl,
                rt_size,
                multisample,
            },
            window,
            dc,
        }
    }
}

impl From<GlConfig> for RenderApiConfig {
    fn from(gl: GlConfig) -> Self {
        #[allow(unused_mut)]
        let mut platform_data = [0usize; 8];
        #[cfg(windows)]
        {
            platform_data[0] = gl.window as usize;
            platform_data[1] = gl.dc as usize;
        }
        RenderApiConfig {
            header: gl.header,
            platform_data,
        }
    }
}

/// Header shared by all eye texture descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextureHeader {
    pub api: RenderApi,
    pub texture_size: Sizei,
    /// Region of the texture the eye was rendered into.
    pub render_viewport: Recti,
}

impl From<TextureHeader> for sys::ovrTextureHeader {
    fn from(h: TextureHeader) -> Self {
        Self {
            API: h.api.to_raw(),
            TextureSize: h.texture_size.into(),
            RenderViewport: h.render_viewport.into(),
        }
    }
}

impl From<sys::ovrTextureHeader> for TextureHeader {
    fn from(h: sys::ovrTextureHeader) -> Self {
        Self {
            api: RenderApi::from_raw(h.API),
            texture_size: h.TextureSize.into(),
            render_viewport: h.RenderViewport.into(),
        }
    }
}

/// Backend-agnostic eye texture.
///
/// Stored in the C union layout, so backend fields that do not line up with
/// the pointer-sized `PlatformData` slots (the OpenGL `TexId`) keep their
/// native offsets.
#[derive(Clone, Copy)]
pub struct Texture {
    raw: sys::ovrGLTexture,
}

impl Texture {
    /// Texture for a backend whose data fills the `PlatformData` slots.
    pub fn new(header: TextureHeader, platform_data: [usize; 8]) -> Texture {
        let mut texture = Texture::default();
        // SAFETY: fields are written in place so the zeroed union bytes
        // between header and slots stay initialized.
        unsafe {
            texture.raw.Texture.Header = header.into();
            texture.raw.Texture.PlatformData = platform_data;
        }
        texture
    }

    pub fn header(&self) -> TextureHeader {
        // SAFETY: every variant starts with the same header.
        unsafe { self.raw.Texture.Header }.into()
    }

    pub fn platform_data(&self) -> [usize; 8] {
        // SAFETY: all bytes of the union are initialized.
        unsafe { self.raw.Texture.PlatformData }
    }

    pub(crate) fn to_raw(self) -> sys::ovrGLTexture {
        self.raw
    }
}

impl Default for Texture {
    fn default() -> Self {
        // SAFETY: the union holds only integers; all-zero is a valid value.
        Texture {
            raw: unsafe { std::mem::zeroed() },
        }
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        // SAFETY: both unions are fully initialized integer data.
        let tex_id = |t: &Texture| unsafe { t.raw.OGL.TexId };
        self.header() == other.header()
            && self.platform_data() == other.platform_data()
            && tex_id(self) == tex_id(other)
    }
}

impl Eq for Texture {}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("header", &self.header())
            .field("platform_data", &self.platform_data())
            .finish()
    }
}

/// OpenGL eye texture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlTexture {
    pub header: TextureHeader,
    /// GL texture object name.
    pub tex_id: u32,
}

impl From<GlTexture> for Texture {
    fn from(gl: GlTexture) -> Self {
        let mut texture = Texture::default();
        // SAFETY: written in place through the OpenGL variant of the union.
        unsafe {
            texture.raw.OGL.Header = gl.header.into();
            texture.raw.OGL.TexId = gl.tex_id;
        }
        texture
    }
}

impl TryFrom<Texture> for GlTexture {
    type Error = RenderApi;

    /// Fails with the texture's actual backend when it is not OpenGL.
    fn try_from(t: Texture) -> Result<Self, Self::Error> {
        let header = t.header();
        if header.api != RenderApi::OpenGl {
            return Err(header.api);
        }
        Ok(GlTexture {
            header,
            // SAFETY: the header says this is the OpenGL variant.
            tex_id: unsafe { t.raw.OGL.TexId },
        })
    }
}

/// One vertex of a distortion mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistortionVertex {
    /// Screen position in normalized device coordinates.
    pub screen_pos_ndc: Vector2f,
    /// Lerp factor between start and end timewarp matrices.
    pub timewarp_factor: f32,
    /// Vignette fade factor.
    pub vignette_factor: f32,
    pub tan_eye_angles_r: Vector2f,
    pub tan_eye_angles_g: Vector2f,
    pub tan_eye_angles_b: Vector2f,
}

impl From<&sys::ovrDistortionVertex> for DistortionVertex {
    fn from(v: &sys::ovrDistortionVertex) -> Self {
        Self {
            screen_pos_ndc: v.ScreenPosNDC.into(),
            timewarp_factor: v.TimeWarpFactor,
            vignette_factor: v.VignetteFactor,
            tan_eye_angles_r: v.TanEyeAnglesR.into(),
            tan_eye_angles_g: v.TanEyeAnglesG.into(),
            tan_eye_angles_b: v.TanEyeAnglesB.into(),
        }
    }
}

/// Distortion mesh generated by the SDK for one eye.
///
/// The vertex and index buffers stay owned by LibOVR and are released with
/// `ovrHmd_DestroyDistortionMesh` when this value is dropped.
pub struct DistortionMesh<'a> {
    fns: &'a Functions,
    raw: sys::ovrDistortionMesh,
}

impl<'a> DistortionMesh<'a> {
    /// # Safety
    /// `raw` must have been filled by a successful `ovrHmd_CreateDistortionMesh`
    /// call on the library `fns` was resolved from.
    pub(crate) unsafe fn from_raw(fns: &'a Functions, raw: sys::ovrDistortionMesh) -> Self {
        Self { fns, raw }
    }

    /// Raw vertex buffer, laid out as the SDK produced it.
    pub fn raw_vertices(&self) -> &[sys::ovrDistortionVertex] {
        if self.raw.pVertexData.is_null() {
            return &[];
        }
        // SAFETY: the SDK allocated VertexCount vertices, alive until destroy.
        unsafe { std::slice::from_raw_parts(self.raw.pVertexData, self.raw.VertexCount as usize) }
    }

    /// Vertices converted to host types.
    pub fn vertices(&self) -> Vec<DistortionVertex> {
        self.raw_vertices().iter().map(DistortionVertex::from).collect()
    }

    /// Triangle list indices into the vertex buffer.
    pub fn indices(&self) -> &[u16] {
        if self.raw.pIndexData.is_null() {
            return &[];
        }
        // SAFETY: the SDK allocated IndexCount indices, alive until destroy.
        unsafe { std::slice::from_raw_parts(self.raw.pIndexData, self.raw.IndexCount as usize) }
    }

    pub fn vertex_count(&self) -> usize {
        self.raw.VertexCount as usize
    }

    pub fn index_count(&self) -> usize {
        self.raw.IndexCount as usize
    }

    /// Release the mesh. Equivalent to dropping it.
    pub fn destroy(self) {}
}

impl Drop for DistortionMesh<'_> {
    fn drop(&mut self) {
        // SAFETY: the mesh came from ovrHmd_CreateDistortionMesh and is freed once.
        unsafe { (self.fns.ovrHmd_DestroyDistortionMesh)(&mut self.raw) };
    }
}

impl std::fmt::Debug for DistortionMesh<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistortionMesh")
            .field("vertex_count", &self.raw.VertexCount)
            .field("index_count", &self.raw.IndexCount)
            .finish()
    }
}
