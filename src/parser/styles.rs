//! Word Styles Parser
//!
//! `word/styles.xml`から段落スタイルのID → 表示名の対応を抽出します。

use std::collections::HashMap;

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::Result;

/// スタイルパーツがない場合の既定段落スタイル名
pub(crate) const DEFAULT_PARAGRAPH_STYLE: &str = "Normal";

/// 段落スタイルの対応表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StyleMap {
    /// styleId -> 表示名
    names: HashMap<String, String>,
    /// 既定の段落スタイル名（`w:default="1"`）
    default_paragraph: Option<String>,
}

impl StyleMap {
    /// `styles.xml`の内容を解析
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut map = StyleMap::default();

        // 解析中の<w:style>: (type, styleId, default, name)
        let mut current: Option<(String, String, bool, Option<String>)> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) | Event::Empty(ref e) => match e.local_name().as_ref() {
                    b"style" => {
                        let style_type = attr_value(e, b"type").unwrap_or_default();
                        let style_id = attr_value(e, b"styleId").unwrap_or_default();
                        let is_default = matches!(
                            attr_value(e, b"default").as_deref(),
                            Some("1") | Some("true") | Some("on")
                        );
                        current = Some((style_type, style_id, is_default, None));
                    }
                    b"name" => {
                        if let Some((_, _, _, ref mut name)) = current {
                            *name = attr_value(e, b"val");
                        }
                    }
                    _ => {}
                },
                Event::End(ref e) if e.local_name().as_ref() == b"style" => {
                    if let Some((style_type, style_id, is_default, name)) = current.take() {
                        if style_type == "paragraph" && !style_id.is_empty() {
                            let name = ui_style_name(name.as_deref().unwrap_or(&style_id));
                            if is_default && map.default_paragraph.is_none() {
                                map.default_paragraph = Some(name.clone());
                            }
                            map.names.insert(style_id, name);
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(map)
    }

    /// 段落に適用されるスタイル名を解決
    ///
    /// スタイルIDが指定されていない、または未知のIDの場合は既定の段落スタイル名を返します。
    pub fn resolve(&self, style_id: Option<&str>) -> String {
        style_id
            .and_then(|id| self.names.get(id))
            .cloned()
            .unwrap_or_else(|| self.default_paragraph_name())
    }

    /// 既定の段落スタイル名
    pub fn default_paragraph_name(&self) -> String {
        self.default_paragraph
            .clone()
            .unwrap_or_else(|| DEFAULT_PARAGRAPH_STYLE.to_string())
    }
}

/// 組み込みスタイルの内部名をUI上の表示名に変換
///
/// `styles.xml`では組み込みスタイルが小文字（例: `heading 1`）で保存されるため、
/// Wordの画面に表示される名前（例: `Heading 1`）に揃えます。
pub(crate) fn ui_style_name(name: &str) -> String {
    match name {
        "caption" => "Caption".to_string(),
        "footer" => "Footer".to_string(),
        "header" => "Header".to_string(),
        "title" => "Title".to_string(),
        _ => match name.strip_prefix("heading ") {
            Some(level) if level.len() == 1 && matches!(level.as_bytes()[0], b'1'..=b'9') => {
                format!("Heading {}", level)
            }
            _ => name.to_string(),
        },
    }
}

/// 要素の属性値を取得（名前空間接頭辞は無視）
pub(crate) fn attr_value(element: &BytesStart, key: &[u8]) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == key)
        .and_then(|attr| {
            unescape(&String::from_utf8_lossy(&attr.value))
                .ok()
                .map(|v| v.into_owned())
        })
}
