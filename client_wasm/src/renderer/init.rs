use web_sys::HtmlCanvasElement;
use wgpu::*;

pub struct GpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
}

/// WebGPU device plus a surface on `canvas`, sized to its drawing buffer
pub async fn init_gpu(canvas: HtmlCanvasElement) -> Result<GpuContext, String> {
    let (width, height) = (canvas.width(), canvas.height());
    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("Failed to create surface: {:?}", e))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            compatible_surface: Some(&surface),
            ..Default::default()
        })
        .await
        .ok_or_else(|| "No WebGPU adapter".to_string())?;
    log::info!("Rendering with {:?}", adapter.get_info().name);

    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Pong device"),
                required_limits: Limits::downlevel_webgl2_defaults(),
                ..Default::default()
            },
            None,
        )
        .await
        .map_err(|e| format!("Failed to create device: {:?}", e))?;

    let surface_config = surface
        .get_default_config(&adapter, width, height)
        .ok_or_else(|| "Canvas surface is not supported by the adapter".to_string())?;
    surface.configure(&device, &surface_config);

    Ok(GpuContext {
        device,
        queue,
        surface,
        surface_config,
    })
}
