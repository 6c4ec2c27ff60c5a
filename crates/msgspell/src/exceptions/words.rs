// Compiled-in allow-list of jargon, abbreviations and brand names.
//
// Every entry must be lowercase: lookups are made with the lowercased token.
// Entries containing digits never match a token.

/// Ordinary English words missing from common dictionaries, including contraction stems.
pub(crate) const COMMON_WORDS: &[&str] = &[
    "adaptively", "adaptivity", "al", "aren", "betweens", "boolean", "booleans", "chamfer",
    "couldn", "customizable", "decrement", "derivate", "deterministically", "doesn", "duplications",
    "effector", "equi", "et", "fader", "globbing", "gridded", "haptics", "hasn", "hetero", "hoc",
    "incompressible", "indices", "instantiation", "iridas", "isn", "iterable", "kyrgyz", "latin",
    "merchantability", "mplayer", "ons", "pong", "procedurals", "resumable", "runtimes", "scalable",
    "shadeless", "shouldn", "smoothen", "spacings", "teleport", "teleporting", "tangency",
    "vertices", "wasn", "zig", "zag",
];

/// Hardware and vendor brand names.
pub(crate) const BRANDS: &[&str] = &[
    "htc", "huawei", "radeon", "vive", "xbox",
];

/// Compound words written without a separator.
pub(crate) const MERGED_WORDS: &[&str] = &[
    "antialiasing", "antialias", "arcsine", "arccosine", "arctangent", "autoclip", "autocomplete",
    "autoexec", "autoexecution", "autogenerated", "autolock", "automask", "automasking",
    "automerge", "autoname", "autopack", "autosave", "autoscale", "autosmooth", "autosplit",
    "backend", "backends", "backface", "backfacing", "backimage", "backscattered", "bandnoise",
    "bindcode", "bitdepth", "bitflag", "bitflags", "bitrate", "blackbody", "blendfile", "blendin",
    "bonesize", "boundbox", "boxpack", "buffersize", "builtin", "builtins", "bytecode", "chunksize",
    "codebase", "customdata", "dataset", "datasets", "de", "deadzone", "decomposable",
    "deconstruct", "defocus", "denoise", "denoised", "denoising", "denoiser", "deselect",
    "deselecting", "deselection", "despill", "despilling", "dirtree", "editcurve", "editmesh",
    "faceforward", "filebrowser", "filelist", "filename", "filenames", "filepath", "filepaths",
    "forcefield", "forcefields", "framerange", "frontmost", "fulldome", "fulldomes", "fullscreen",
    "gamepad", "gridline", "gridlines", "hardlight", "hemi", "hostname", "inbetween", "inscatter",
    "inscattering", "libdata", "lightcache", "lightgroup", "lightgroups", "lightprobe",
    "lightprobes", "lightless", "lineset", "linestyle", "linestyles", "localview", "lookup",
    "lookups", "mathutils", "micropolygon", "midlevel", "midground", "mixdown", "monospaced",
    "multi", "multifractal", "multiframe", "multilayer", "multipaint", "multires",
    "multiresolution", "multisampling", "multiscatter", "multitexture", "multithreaded",
    "multiuser", "multiview", "namespace", "nodetree", "nodetrees", "keyconfig", "offscreen",
    "online", "playhead", "popup", "popups", "pointcloud", "pre", "precache", "precaching",
    "precalculate", "precomputing", "prefetch", "prefilter", "prefiltering", "preload",
    "premultiply", "premultiplied", "prepass", "prepend", "preprocess", "preprocessing",
    "preprocessor", "preprocessed", "preseek", "preselect", "preselected", "promillage", "pushdown",
    "raytree", "readonly", "realtime", "reinject", "reinjected", "rekey", "relink", "remesh",
    "reprojection", "reproject", "reprojecting", "resample", "rescale", "resize", "restpose",
    "resync", "resynced", "retarget", "retargets", "retargeting", "retargeted", "retime", "retimed",
    "retiming", "rigidbody", "ringnoise", "rolloff", "runtime", "scanline", "screenshot",
    "screenshots", "seekability", "selfcollision", "shadowbuffer", "shadowbuffers", "singletexture",
    "softbox", "spellcheck", "spellchecking", "startup", "stateful", "starfield", "studiolight",
    "subflare", "subflares", "subframe", "subframes", "subclass", "subclasses", "subclassing",
    "subdirectory", "subdirectories", "subdir", "subdirs", "subitem", "submode", "submodule",
    "submodules", "subpath", "subsample", "subsamples", "subsampling", "subsize", "substep",
    "substeps", "substring", "targetless", "textbox", "textboxes", "tilemode", "timestamp",
    "timestamps", "timestep", "timesteps", "todo", "tradeoff", "un", "unadjust", "unadjusted",
    "unassociate", "unassociated", "unbake", "uncheck", "unclosed", "uncomment", "unculled",
    "undeformed", "undistort", "undistorted", "undistortion", "ungroup", "ungrouped", "unhandled",
    "unhide", "unindent", "unitless", "unkeyed", "unlink", "unlinked", "unmute", "unphysical",
    "unpremultiply", "unprojected", "unprotect", "unreacted", "unreferenced", "unregister",
    "unregistration", "unselect", "unselected", "unselectable", "unsets", "unshadowed", "unspill",
    "unstitchable", "unstitch", "unsubdivided", "unsubdivide", "untrusted", "vectorscope",
    "whitespace", "whitespaces", "worldspace", "workflow", "workspace", "workspaces",
];

/// Neologisms and informal terms.
pub(crate) const NEOLOGISMS: &[&str] = &[
    "affectable", "animatable", "automagic", "automagically", "blobby", "blockiness", "blocky",
    "collider", "colliders", "deformer", "deformers", "determinator", "editability", "effectors",
    "expander", "instancer", "keyer", "lacunarity", "linkable", "numerics", "occluder", "occluders",
    "overridable", "passepartout", "perspectively", "pixelate", "pointiness", "polycount",
    "polygonization", "polygonalization", "scalings", "selectable", "selectability", "shaper",
    "smoothening", "spherize", "spherized", "statting", "stitchable", "symmetrize", "trackability",
    "transmissivity", "rasterized", "rasterization", "rasterizer", "renderer", "renderers",
    "renderable", "renderability",
];

/// Terms that should be reworded upstream but are still accepted.
pub(crate) const TOLERATED: &[&str] = &[
    "convertor", "fullscr",
];

pub(crate) const ABBREVIATIONS: &[&str] = &[
    "aero", "amb", "anim", "aov", "app", "args", "bbox", "bboxes", "bksp", "bool", "calc", "cfl",
    "config", "configs", "const", "coord", "coords", "degr", "diff", "dof", "dupli", "duplis", "eg",
    "esc", "expr", "fac", "fra", "fract", "frs", "grless", "http", "init", "irr", "kbit", "kb",
    "lang", "langs", "lclick", "rclick", "lensdist", "loc", "rot", "pos", "lorem", "luma", "mbs",
    "mem", "mul", "multicam", "num", "ok", "orco", "ortho", "pano", "persp", "pref", "prefs",
    "prev", "param", "premul", "quad", "quads", "quat", "quats", "recalc", "recalcs", "refl", "sce",
    "sel", "spec", "struct", "structs", "subdiv", "sys", "tex", "texcoord", "tmr", "tri", "tris",
    "udim", "udims", "upres", "usd", "uv", "uvs", "uvw", "uw", "uvmap", "ve", "vec", "vel", "vert",
    "verts", "vis", "vram", "xor", "xyz", "xzy", "yxz", "yzx", "zxy", "zyx", "xy", "xz", "yx", "yz",
    "zx", "zy",
];

/// General computing and science vocabulary.
pub(crate) const COMPUTING_TERMS: &[&str] = &[
    "affine", "albedo", "anamorphic", "anisotropic", "anisotropy", "arcminute", "arcminutes",
    "arcsecond", "arcseconds", "bimanual", "bitangent", "boid", "boids", "ceil", "centum",
    "compressibility", "coplanar", "curvilinear", "dekameter", "dekameters", "equiangular",
    "equisolid", "euler", "eulers", "eumelanin", "fribidi", "gettext", "hashable", "hotspot",
    "hydrostatic", "interocular", "intrinsics", "irradiance", "isosurface", "jitter", "jittering",
    "jittered", "keymap", "keymaps", "lambertian", "laplacian", "metadata", "microwatt",
    "microwatts", "microflake", "milliwatt", "milliwatts", "msgfmt", "nand", "xnor", "nanowatt",
    "nanowatts", "normals", "numpad", "octahedral", "octree", "omnidirectional", "opengl", "openmp",
    "parametrization", "pheomelanin", "photoreceptor", "poly", "polyline", "polylines",
    "probabilistically", "pulldown", "pulldowns", "quadratically", "quantized", "quartic",
    "quaternion", "quaternions", "quintic", "samplerate", "sandboxed", "sawtooth", "scrollback",
    "scrollbar", "scroller", "searchable", "spacebar", "subtractive", "superellipse", "thumbstick",
    "tooltip", "tooltips", "touchpad", "trackpad", "trilinear", "triquadratic", "tuple", "unicode",
    "viewport", "viewports", "viscoelastic", "vorticity", "waveform", "waveforms", "wildcard",
    "wildcards", "wintab",
];

/// Computer graphics vocabulary.
pub(crate) const GRAPHICS_TERMS: &[&str] = &[
    "anaglyph", "bezier", "beziers", "bicubic", "bilinear", "bindpose", "binormal", "blackpoint",
    "whitepoint", "blendshape", "blendshapes", "blinn", "bokeh", "catadioptric", "centroid",
    "chroma", "chrominance", "clearcoat", "codec", "codecs", "collada", "colorspace", "compositing",
    "crossfade", "cubemap", "cubemaps", "cuda", "deinterlace", "dropoff", "duotone", "dv",
    "eigenvectors", "emissive", "equirectangular", "filmlike", "fisheye", "framerate", "gimbal",
    "grayscale", "icosahedron", "icosphere", "illuminant", "inpaint", "kerning", "lightmap",
    "linearlight", "lossless", "lossy", "luminance", "mantaflow", "matcap", "microfacet",
    "midtones", "mipmap", "mipmaps", "mip", "ngon", "ngons", "ntsc", "nurb", "nurbs", "perlin",
    "phong", "photorealistic", "pinlight", "posterize", "primvar", "primvars", "qi", "radiosity",
    "raycast", "raycasting", "raymarching", "raytrace", "raytracing", "raytraced", "refractions",
    "remesher", "remeshing", "renderfarm", "retopology", "scanfill", "shader", "shaders",
    "shadowmap", "shadowmaps", "softlight", "specular", "specularity", "spillmap", "sobel",
    "stereoscopy", "surfel", "surfels", "texel", "timecode", "tonemap", "toon", "transmissive",
    "uvproject", "vividlight", "volumetrics", "voronoi", "voxel", "voxels", "vsync", "vulkan",
    "wireframe", "wireframes", "xforms", "zmask", "ztransp",
];

/// Terms specific to the application whose UI strings are checked.
pub(crate) const PRODUCT_TERMS: &[&str] = &[
    "audaspace", "azone", "backwire", "bbone", "bdata", "bendy", "bmesh", "breakdowner", "bspline",
    "bweight", "colorband", "crazyspace", "datablock", "datablocks", "despeckle", "depsgraph",
    "dopesheet", "dupliface", "duplifaces", "dupliframe", "dupliframes", "dupliobject", "dupliob",
    "dupligroup", "duplivert", "dyntopo", "editbone", "editmode", "eevee", "fcurve", "fcurves",
    "fedge", "fedges", "filmic", "fluidsim", "freestyle", "enum", "enums", "gizmogroup", "gon",
    "gons", "gpencil", "idcol", "keyframe", "keyframes", "keyframing", "keyframed", "lookdev",
    "luminocity", "mathvis", "metaball", "metaballs", "mball", "metaelement", "metaelements",
    "metastrip", "metastrips", "movieclip", "mpoly", "mtex", "nabla", "navmesh", "outliner",
    "overscan", "paintmap", "paintmaps", "polygroup", "polygroups", "poselib", "pushpull",
    "pyconstraint", "pyconstraints", "qe", "shaderfx", "shaderfxs", "shapekey", "shapekeys",
    "shrinkfatten", "shrinkwrap", "softbody", "stucci", "subtype", "sunsky", "tessface",
    "tessfaces", "texface", "timeline", "timelines", "tmpact", "tosphere", "uilist", "userpref",
    "vcol", "vcols", "vgroup", "vgroups", "vinterlace", "vse", "wasd", "wasdqe", "wetmap",
    "wetmaps", "wpaint", "uvwarp",
];

/// Operator category prefixes that leak into UI strings.
pub(crate) const OPERATOR_CATEGORIES: &[&str] = &[
    "cachefile", "paintcurve", "ptcache", "dpaint",
];

/// Algorithm, library and author names.
pub(crate) const ALGORITHM_NAMES: &[&str] = &[
    "ashikhmin", "arsloe", "beckmann", "blackman", "blosc", "burley", "butterworth", "catmull",
    "catrom", "chiang", "chebychev", "conrady", "courant", "cryptomatte", "crypto", "devlin",
    "embree", "gmp", "hosek", "kutta", "kuwahara", "lennard", "marsen", "mikktspace", "minkowski",
    "minnaert", "mises", "moskowitz", "musgrave", "nayar", "netravali", "nishita", "ogawa", "oren",
    "peucker", "pierson", "preetham", "prewitt", "ramer", "reinhard", "runge", "sobol", "verlet",
    "von", "wilkie", "worley",
];

pub(crate) const ACRONYMS: &[&str] = &[
    "aa", "msaa", "acescg", "ao", "aovs", "api", "apic", "asc", "cdl", "ascii", "atrac", "avx",
    "bsdf", "bsdfs", "bssrdf", "bt", "bw", "ccd", "cie", "cmd", "cmos", "cpus", "ctrl", "cw", "ccw",
    "dci", "dev", "dls", "djv", "dpi", "dvar", "dx", "eo", "eotf", "ewa", "fh", "fk", "fov", "fft",
    "futura", "fx", "gfx", "ggx", "gl", "glsl", "gpl", "gpu", "gpus", "hc", "hdc", "hdr", "hdri",
    "hdris", "hh", "mm", "ss", "ff", "hpg", "hsv", "hsva", "hsl", "id", "iec", "ies", "ior", "itu",
    "jonswap", "lfe", "lhs", "lmb", "mmb", "rmb", "lscm", "lx", "mis", "mocap", "msgid", "msgids",
    "mux", "ndof", "pbr", "ppc", "precisa", "px", "qmc", "rdna", "rdp", "rgb", "rgba", "ris", "rhs",
    "rpp", "rv", "sdf", "sdl", "sdls", "sl", "smpte", "ssao", "ssr", "svn", "tma", "ui", "unix",
    "uuid", "vbo", "vbos", "vfx", "vmm", "vr", "wxyz", "xform", "xr", "ycc", "ycca", "yrgb", "yuv",
    "yuva",
];

pub(crate) const PRODUCT_ACRONYMS: &[&str] = &[
    "bge", "bli", "bpy", "bvh", "dbvt", "dop", "ik", "nla", "py", "qbvh", "rna", "rvo", "simd",
    "sph", "svbvh",
];

/// File types, codecs and container formats.
pub(crate) const FILE_FORMATS: &[&str] = &[
    "aac", "avi", "attrac", "autocad", "autodesk", "bmp", "btx", "cineon", "dpx", "dwaa", "dwab",
    "dxf", "eps", "exr", "fbx", "fbxnode", "ffmpeg", "flac", "gltf", "gprim", "gzip", "ico", "jpg",
    "jpeg", "jpegs", "json", "lightwave", "lzw", "matroska", "mdd", "mkv", "mpeg", "mjpeg", "mtl",
    "ogg", "openjpeg", "osl", "oso", "pcm", "piz", "png", "pngs", "po", "quicktime", "rle", "sgi",
    "stl", "svg", "targa", "tga", "tiff", "theora", "usdz", "vdb", "vorbis", "vp9", "wav", "webm",
    "xiph", "xml", "xna", "xvid",
];

/// All categories.
pub(crate) const CATEGORIES: &[&[&str]] = &[
    COMMON_WORDS,
    BRANDS,
    MERGED_WORDS,
    NEOLOGISMS,
    TOLERATED,
    ABBREVIATIONS,
    COMPUTING_TERMS,
    GRAPHICS_TERMS,
    PRODUCT_TERMS,
    OPERATOR_CATEGORIES,
    ALGORITHM_NAMES,
    ACRONYMS,
    PRODUCT_ACRONYMS,
    FILE_FORMATS,
];
