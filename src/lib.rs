//! hitlabel - 可交互文本标签库
//!
//! 模块结构：
//! - core: 几何基础（Point, Size, Rect, EdgeInsets）
//! - style: 样式属性（字体、颜色、对齐、换行模式、阴影）
//! - text: 带样式文本与字体度量
//! - layout: 断行、截断与字形定位
//! - measure: 尺寸计算
//! - hit_test: 点击位置到字符索引
//! - label: 宿主适配（缓存、绘制、触摸分发）
//! - settings: JSON 样式文件

pub mod core;
pub mod label;
pub mod layout;
pub mod logging;
pub mod measure;
pub mod settings;
pub mod style;
pub mod text;
