mod info;
mod track;

pub(crate) const SAMPLE_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<circuito xmlns="http://www.uniovi.es/circuito">
  <nombre> Circuito de Prueba </nombre>
  <geografia>
    <origen>
      <longitud>-6.0343</longitud>
      <latitud>36.7081</latitud>
      <altitud>100</altitud>
    </origen>
  </geografia>
  <tramos>
    <tramo>
      <distancia unidades="m">500</distancia>
      <sector>1</sector>
      <puntoFinal>
        <longitud>-6.0330</longitud>
        <latitud>36.7090</latitud>
        <altitud> 150 </altitud>
      </puntoFinal>
    </tramo>
    <tramo>
      <distancia unidades="m">500</distancia>
      <sector>2</sector>
      <puntoFinal>
        <longitud>-6.0320</longitud>
        <latitud>36.7100</latitud>
        <altitud>90</altitud>
      </puntoFinal>
    </tramo>
  </tramos>
</circuito>
"#;
