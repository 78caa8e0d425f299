//! 设备目录
//!
//! 只读的数据源：按设备 id 查询端口、价格、功耗与机架高度。
//! 引擎的计算路径不直接查询目录，目录只用于生成新的拓扑配置。

mod devices;

pub use devices::{CatalogError, DeviceCatalog, DeviceSpec, StaticCatalog, apply_devices};
